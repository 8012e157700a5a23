//! Environment configuration for the pipeline.

use mathcast_core::RetryBudget;
use std::path::PathBuf;

/// Settings governing one pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory final videos and run archives land in
    pub output_dir: PathBuf,
    /// Retry budget for the render-repair cycle
    pub retry_budget: RetryBudget,
    /// Concurrent voice synthesis jobs
    pub synthesis_pool: usize,
    /// Whether to persist intermediate artifacts per run
    pub archive_intermediates: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            retry_budget: RetryBudget::default(),
            synthesis_pool: 4,
            archive_intermediates: true,
        }
    }
}

impl PipelineConfig {
    /// Reads overrides from `MATHCAST_*` environment variables.
    ///
    /// `MATHCAST_MAX_RETRIES` unset means the default bounded budget; the
    /// literal value `unlimited` lifts the ceiling.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("MATHCAST_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Ok(raw) = std::env::var("MATHCAST_MAX_RETRIES") {
            config.retry_budget = if raw.eq_ignore_ascii_case("unlimited") {
                RetryBudget::Unbounded
            } else {
                raw.parse().map(RetryBudget::Bounded).unwrap_or_default()
            };
        }
        if let Ok(raw) = std::env::var("MATHCAST_SYNTH_POOL") {
            if let Ok(size) = raw.parse() {
                config.synthesis_pool = size;
            }
        }
        if let Ok(raw) = std::env::var("MATHCAST_ARCHIVE_INTERMEDIATES") {
            config.archive_intermediates = raw != "0" && !raw.eq_ignore_ascii_case("false");
        }
        config
    }
}
