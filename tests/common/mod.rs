//! Common test utilities for the interpreter's integration tests.
//!
//! Each test file is compiled as a separate crate, so not every helper here
//! is used by every file.
#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

/// Returns the path to the `loxr` binary built by cargo.
pub fn loxr_binary() -> String {
    env!("CARGO_BIN_EXE_loxr").to_string()
}

/// The captured result of running the binary once.
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

fn write_source(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp source file");
    file.write_all(source.as_bytes())
        .expect("failed to write temp source file");
    file
}

fn capture(output: Output) -> RunResult {
    RunResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().expect("process terminated by signal"),
    }
}

/// Runs `loxr <mode> <file>` against a temp file holding `source`.
pub fn run_mode(mode: &str, source: &str) -> RunResult {
    let file = write_source(source);
    let output = Command::new(loxr_binary())
        .arg(mode)
        .arg(file.path())
        .output()
        .expect("failed to spawn loxr binary");
    capture(output)
}

pub fn run_tokenize(source: &str) -> RunResult {
    run_mode("tokenize", source)
}

pub fn run_parse(source: &str) -> RunResult {
    run_mode("parse", source)
}

pub fn run_evaluate(source: &str) -> RunResult {
    run_mode("evaluate", source)
}

pub fn run_run(source: &str) -> RunResult {
    run_mode("run", source)
}

/// Runs `loxr <mode>` against a nonexistent path, for I/O-failure tests.
pub fn run_mode_missing_file(mode: &str) -> RunResult {
    let output = Command::new(loxr_binary())
        .arg(mode)
        .arg("/nonexistent/path/does-not-exist.lox")
        .output()
        .expect("failed to spawn loxr binary");
    capture(output)
}
