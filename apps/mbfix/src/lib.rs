//! mbfix core library.
//!
//! Finds Vue templates where the `mb-6` margin class sits directly on an
//! `<input>` and moves it onto a wrapping `<div>`.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Immutable run configuration.
//! - `walk`: Template discovery under the source root.
//! - `lint`: Fixed detector set and per-file analysis.
//! - `fix`: Rewriting of flagged inputs.
//! - `backup`: Timestamped copy of the source tree.
//! - `run`: Orchestration of one end-to-end run.
//! - `models`: Issue, file record, fix result, and summary types.
//! - `output`: Console printers.
//! - `utils`: Supporting helpers.
pub mod backup;
pub mod cli;
pub mod config;
pub mod fix;
pub mod lint;
pub mod models;
pub mod output;
pub mod run;
pub mod utils;
pub mod walk;
