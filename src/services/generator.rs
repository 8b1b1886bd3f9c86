//! End-to-end palette generation: configuration in, palette out.

use gpl_ramp::{PaletteBuilder, PaletteSettings};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ConfigError, IoFailure};
use crate::models::{RawConfig, Validation};
use crate::services::output::{deliver, Delivery};

/// Inputs of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Configuration file; defaults are used when `None`
    pub input: Option<PathBuf>,
    /// Destination file; stdout when `None`
    pub output: Option<PathBuf>,
    pub validation: Validation,
    /// Upper bound on the total bit depth driving the row count
    pub max_depth_sum: Option<u32>,
    /// Default year and exclusive bound for numeric years
    pub current_year: i32,
}

/// Failures that stop generation before a complete palette is written.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] IoFailure),
}

/// Result of a run that produced a palette.
#[derive(Debug)]
pub struct Outcome {
    pub settings: PaletteSettings,
    pub delivery: Delivery,
    /// Set when the configuration file could not be read
    pub input_failure: Option<IoFailure>,
}

impl Outcome {
    /// Non-fatal failures in the order they happened.
    pub fn failures(&self) -> Vec<&IoFailure> {
        self.input_failure
            .iter()
            .chain(self.delivery.failure())
            .collect()
    }
}

/// Read and resolve the configuration named by `opts`.
///
/// An unreadable input file is not fatal: the failure is returned alongside
/// the default settings.
pub fn load_settings(
    opts: &GenerateOptions,
) -> Result<(PaletteSettings, Option<IoFailure>), GenerateError> {
    let (raw, input_failure) = match opts.input {
        Some(ref path) => match RawConfig::read(path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "Loaded configuration file");
                (RawConfig::parse(path, &content)?, None)
            }
            Err(failure) => {
                tracing::warn!(%failure, "Failed to read config, using defaults");
                (RawConfig::default(), Some(failure))
            }
        },
        None => (RawConfig::default(), None),
    };

    let settings = raw.resolve(opts.current_year, opts.validation)?;

    if let Some(limit) = opts.max_depth_sum {
        let sum = settings.depth_sum();
        if sum > limit {
            return Err(ConfigError::TooLarge { sum, limit }.into());
        }
    }

    Ok((settings, input_failure))
}

/// Load settings, build the palette and deliver it.
///
/// `stdout` receives the palette when no output path is set or the output
/// path is not writable.
pub fn generate<W: Write>(opts: &GenerateOptions, stdout: W) -> Result<Outcome, GenerateError> {
    let (settings, input_failure) = load_settings(opts)?;

    let builder = PaletteBuilder::new(&settings);
    let delivery = deliver(&builder, opts.output.as_deref(), stdout)?;

    Ok(Outcome {
        settings,
        delivery,
        input_failure,
    })
}
