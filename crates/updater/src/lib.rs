//! Library backing the `apollo-updater` binary.
//!
//! - [`cli`] - Argument parsing
//! - [`logging`] - Tracing subscriber setup
//! - [`update`] - The update run itself

#![warn(missing_docs)]

pub mod cli;
pub mod logging;
pub mod update;

pub use update::{UpdateOptions, UpdateOutcome, run_update};
