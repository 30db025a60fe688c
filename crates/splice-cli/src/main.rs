//! Entry point for the `splice` binary.
//!
//! Delegates to [`splice_cli::run`], which loads configuration, patches the
//! target file with the built-in recipe and prints a step report.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    splice_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
