//! Command-line interface for the mathcast binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::run_generation;
