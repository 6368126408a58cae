//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic personal library catalog**. The command-line
//! client is one way to drive it; nothing below the CLI assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (raw strings → BookSelectors)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - validate → load → mutate Catalog → save                  │
//! │  - Read-only queries live in query.rs                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, whole-catalog load/save                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>`, and never prints or exits. Problems the user should
//! see but that do not abort the operation (a save that failed after the
//! catalog changed, a corrupt file that was moved aside) travel as
//! [`commands::CmdMessage`]s on the result.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: The ordered in-memory collection of books
//! - [`query`]: Filtering, search and statistics
//! - [`index`]: Display indexes and book selectors
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `Genre`, `Status`, `Rating`, `Scope`)
//! - [`config`]: Per-scope configuration
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;
