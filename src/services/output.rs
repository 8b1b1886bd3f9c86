//! Palette delivery to a file or standard output.

use gpl_ramp::PaletteBuilder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::IoFailure;

/// Path reported when writing to standard output fails.
const STDOUT_PATH: &str = "<stdout>";

/// Where the palette ended up.
#[derive(Debug)]
pub enum Delivery {
    /// Written to the requested file
    File(PathBuf),
    /// Written to stdout because no file was requested
    Stdout,
    /// The requested file was not writable; written to stdout instead
    StdoutFallback(IoFailure),
}

impl Delivery {
    /// The recorded failure, if the palette did not reach its destination.
    pub fn failure(&self) -> Option<&IoFailure> {
        match self {
            Delivery::StdoutFallback(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Write the palette to `output`, or to `stdout` when no path is given.
///
/// If the output file cannot be created because permission is denied, the
/// palette goes to `stdout` and the failure is returned inside
/// [`Delivery::StdoutFallback`]. Any other failure is returned as an error.
///
/// Only opening the file can fall back. Once the file is open, a failed
/// write (permission denied included) is returned as an error, since part
/// of the palette may already be on disk.
pub fn deliver<W: Write>(
    builder: &PaletteBuilder,
    output: Option<&Path>,
    stdout: W,
) -> Result<Delivery, IoFailure> {
    let Some(path) = output else {
        write_stdout(builder, stdout)?;
        return Ok(Delivery::Stdout);
    };

    match File::create(path) {
        Ok(file) => {
            builder
                .write_to(BufWriter::new(file))
                .map_err(|e| IoFailure::from_io(e, path))?;
            tracing::info!(
                path = %path.display(),
                model = %builder.settings().color_model,
                rows = builder.row_count(),
                "Palette written"
            );
            Ok(Delivery::File(path.to_path_buf()))
        }
        Err(e) => fallback_on_denied(IoFailure::from_io(e, path), builder, stdout),
    }
}

fn fallback_on_denied<W: Write>(
    failure: IoFailure,
    builder: &PaletteBuilder,
    stdout: W,
) -> Result<Delivery, IoFailure> {
    match failure {
        IoFailure::PermissionDenied { .. } => {
            tracing::warn!(path = %failure.path().display(), "Output not writable, falling back to stdout");
            write_stdout(builder, stdout)?;
            Ok(Delivery::StdoutFallback(failure))
        }
        other => Err(other),
    }
}

fn write_stdout<W: Write>(builder: &PaletteBuilder, stdout: W) -> Result<(), IoFailure> {
    builder
        .write_to(BufWriter::new(stdout))
        .map_err(|e| IoFailure::from_io(e, Path::new(STDOUT_PATH)))
}
