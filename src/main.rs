use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gplgen::models::{current_year, Validation};
use gplgen::services::{generate, GenerateOptions};

#[derive(Parser)]
#[command(name = "gplgen")]
#[command(version)]
#[command(about = "Generate exhaustive gray or RGB ramp palettes in GIMP palette format")]
#[command(
    after_help = "Exit status: 0 on success. When the palette was still written but a \
file could not be used, the errno of the last such failure is returned \
(2 not found, 13 permission denied, 1 other)."
)]
struct Cli {
    /// Configuration file (`key = value` lines, or YAML for .yaml/.yml)
    input: Option<PathBuf>,

    /// Output palette file (stdout if omitted)
    output: Option<PathBuf>,

    /// Reject malformed configuration values instead of using defaults
    #[arg(long)]
    strict: bool,

    /// Refuse to generate when the summed channel depths exceed this value
    /// (e.g. 18 caps RGB at 6 bits per channel)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=24))]
    max_depth_sum: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the palette, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gplgen=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .init();

    let opts = GenerateOptions {
        input: cli.input,
        output: cli.output,
        validation: if cli.strict {
            Validation::Strict
        } else {
            Validation::Lenient
        },
        max_depth_sum: cli.max_depth_sum,
        current_year: current_year(),
    };

    let outcome = generate(&opts, io::stdout().lock()).context("Failed to generate palette")?;

    // Recoverable failures are reported after the palette has been written.
    let mut exit_code = 0;
    for failure in outcome.failures() {
        eprintln!("{}: [Errno {}] {}", failure.name(), failure.code(), failure);
        exit_code = failure.code();
    }
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
