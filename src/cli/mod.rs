//! Command Line Interface (CLI) layer for pgparse.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that wires the command line to
//! the pipeline exposed by the `pgparse` library.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
