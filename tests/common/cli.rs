//! Helpers for running the compiled gplgen binary.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured result of one binary invocation.
pub struct CliOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Run gplgen with `args` in `cwd`, logging disabled unless RUST_LOG is set.
pub fn run_gplgen(cwd: &Path, args: &[&str]) -> CliOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_gplgen"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to run gplgen binary");

    CliOutput {
        code: output.status.code(),
        stdout: String::from_utf8(output.stdout).expect("stdout is not UTF-8"),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Summary of a stdout stream too large to keep in memory.
pub struct StreamedOutput {
    pub code: Option<i32>,
    /// Leading lines, up to the count requested
    pub head: Vec<String>,
    pub last: Option<String>,
    pub line_count: usize,
    pub stderr: String,
}

/// Run gplgen and scan its stdout line by line instead of capturing it.
pub fn run_gplgen_streamed(cwd: &Path, args: &[&str], head_lines: usize) -> StreamedOutput {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gplgen"))
        .args(args)
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run gplgen binary");

    let stdout = child.stdout.take().expect("stdout not piped");
    let mut head = Vec::with_capacity(head_lines);
    let mut last = None;
    let mut line_count = 0;
    for line in BufReader::new(stdout).lines() {
        let line = line.expect("stdout is not UTF-8");
        if head.len() < head_lines {
            head.push(line.clone());
        }
        last = Some(line);
        line_count += 1;
    }

    let mut stderr = String::new();
    child
        .stderr
        .take()
        .expect("stderr not piped")
        .read_to_string(&mut stderr)
        .expect("stderr is not UTF-8");
    let status = child.wait().expect("gplgen did not exit");

    StreamedOutput {
        code: status.code(),
        head,
        last,
        line_count,
        stderr,
    }
}
