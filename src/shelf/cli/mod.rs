//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Naked Execution (`shelf`)
//!
//! Running `shelf` with no arguments lists the library, like `shelf list`.
//!
//! ## Selecting Books
//!
//! `view`, `edit` and `delete` take the indexes shown by `list` (`shelf rm 2 5`).
//! Anything that is not an index is joined into a title: `shelf view the hobbit`.
//!
//! ## Output
//!
//! Tables and messages go to stdout. With `--output json`, stdout carries only
//! JSON and messages move to stderr. A change that could not be saved prints
//! an error and exits with status 1.
//!
//! ## Module Structure
//!
//! - `args`: Argument parsing via clap
//! - `commands`: Context setup and per-command handlers
//! - `print`: Tables, details, statistics and messages

pub mod args;
mod commands;
mod print;

pub use commands::run;
