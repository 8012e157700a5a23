//! MathCast CLI binary.
//!
//! Generates one narrated animation video from a query given on the command
//! line, blocking until the pipeline finishes and exiting non-zero on
//! failure.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{run_generation, Cli};

    dotenvy::dotenv().ok();
    let args = Cli::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    run_generation(args).await?;
    Ok(())
}
