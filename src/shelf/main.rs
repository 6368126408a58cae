//! # Shelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns its outcome into an exit status.
//!
//! Everything from `shelf::api` inward is UI agnostic. The CLI layer owns
//! argument parsing, context setup (scope, config, store location),
//! dispatch, rendering and exit codes.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
