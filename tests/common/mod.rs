//! Shared utilities for process-level tests.

use std::process::{Command, Output};

/// Path of the compiled probe binary.
pub const PROBE: &str = env!("CARGO_BIN_EXE_provider-lifecycle-probe");

/// Provider every OpenSSL 3 build ships.
pub const ALWAYS_AVAILABLE: &str = "default";

/// Run the probe with `args` and a clean logging environment.
pub fn run_probe(args: &[&str]) -> Output {
    run_probe_with_log(args, None)
}

/// Run the probe with `args` and `RUST_LOG` set to `filter`, if any.
pub fn run_probe_with_log(args: &[&str], filter: Option<&str>) -> Output {
    let mut command = Command::new(PROBE);
    command.args(args).env_remove("RUST_LOG");
    if let Some(filter) = filter {
        command.env("RUST_LOG", filter);
    }
    command.output().expect("failed to spawn probe")
}

/// Lines the probe wrote to stdout.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Assert stdout holds exactly the version line.
#[allow(dead_code)]
pub fn assert_single_version_line(output: &Output) {
    let lines = stdout_lines(output);
    assert_eq!(lines.len(), 1, "stdout: {:?}", lines);
    assert!(lines[0].starts_with("OpenSSL "), "stdout: {:?}", lines);
    assert!(lines[0].ends_with(')'), "stdout: {:?}", lines);
}
