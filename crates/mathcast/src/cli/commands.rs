//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// MathCast - generate a narrated mathematical animation video from a query
#[derive(Parser, Debug)]
#[command(name = "mathcast")]
#[command(about = "Generate a narrated mathematical animation video from a query", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The mathematical query to explain
    pub query: String,

    /// Content category (theorem, problem, concept, definition, proof)
    #[arg(long)]
    pub category: Option<String>,

    /// Difficulty level (elementary, high_school, undergraduate, graduate)
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Maximum video duration in seconds (30-600)
    #[arg(long)]
    pub max_duration: Option<u32>,

    /// Area to focus on; repeatable
    #[arg(long = "focus")]
    pub focus: Vec<String>,

    /// Priority level (0-10)
    #[arg(long, default_value = "0")]
    pub priority: u8,

    /// Directory final videos land in
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Repair attempts per scene; unlimited when absent
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Write the run metrics JSON next to the video
    #[arg(long)]
    pub save_metrics: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
