//! Run-level performance metrics.

use crate::StageSummary;
use chrono::{DateTime, Utc};
use mathcast_interface::ModelUsage;
use serde::Serialize;
use std::collections::HashMap;

/// Metrics for one generation run.
///
/// Recorded on success and, partially, on failure: a failed run still
/// carries the durations of every stage that started plus the error text.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetrics {
    /// Wall-clock start of the run
    pub started_at: DateTime<Utc>,
    /// Wall-clock end of the run
    pub finished_at: DateTime<Utc>,
    /// Total elapsed seconds
    pub total_duration: f64,
    /// Per-stage timing
    #[serde(flatten)]
    pub stages: StageSummary,
    /// Model usage per capability operation
    pub model_usage: HashMap<String, ModelUsage>,
    /// Error message when the run failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunMetrics {
    /// Builds the metrics for a run that started at `started_at`.
    pub fn finalize(
        started_at: DateTime<Utc>,
        stages: StageSummary,
        model_usage: HashMap<String, ModelUsage>,
        error: Option<String>,
    ) -> Self {
        let finished_at = Utc::now();
        Self {
            started_at,
            finished_at,
            total_duration: (finished_at - started_at).num_milliseconds() as f64 / 1000.0,
            stages,
            model_usage,
            error,
        }
    }
}
