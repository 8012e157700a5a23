//! Stage progression and timing.

use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

/// The fixed stages of a generation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// Query validation and normalization
    InputProcessing,
    /// Model explanation of the topic
    ProblemSolving,
    /// Plan drafting and enrichment
    AnimationPlanning,
    /// Narration scripts and scene code
    ContentGeneration,
    /// Persisting intermediate artifacts
    IntermediateArchival,
    /// Rendering, narration, synchronization, assembly
    MediaProduction,
}

/// Timing summary over the completed stages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StageSummary {
    /// Sum of stage durations in seconds
    pub total_time: f64,
    /// Elapsed seconds per stage
    pub stage_times: HashMap<String, f64>,
    /// Share of total time per stage, in percent
    pub stage_percentages: HashMap<String, f64>,
}

/// Tracks stage progression, logging percent-complete transitions.
///
/// Every started stage is timed whether it ends in success or failure, so
/// partial metrics survive an aborted run.
#[derive(Debug, Default)]
pub struct StageTracker {
    current: usize,
    started: HashMap<Stage, Instant>,
    elapsed: HashMap<Stage, f64>,
}

impl StageTracker {
    /// Creates a tracker with no stages started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a stage as started.
    pub fn start(&mut self, stage: Stage) {
        use strum::EnumCount;
        let progress = self.current as f64 / Stage::COUNT as f64 * 100.0;
        self.current += 1;
        tracing::info!(
            "[{progress:.1}%] starting stage: {stage} ({}/{})",
            self.current,
            Stage::COUNT
        );
        self.started.insert(stage, Instant::now());
    }

    /// Marks a stage as finished, recording its elapsed time.
    pub fn end(&mut self, stage: Stage) {
        self.finish(stage, true);
    }

    /// Marks a stage as failed, still recording its elapsed time.
    pub fn fail(&mut self, stage: Stage) {
        self.finish(stage, false);
    }

    fn finish(&mut self, stage: Stage, success: bool) {
        use strum::EnumCount;
        let Some(started) = self.started.remove(&stage) else {
            tracing::warn!(%stage, "ending untracked stage");
            return;
        };
        let elapsed = started.elapsed().as_secs_f64();
        self.elapsed.insert(stage, elapsed);
        let progress = self.current as f64 / Stage::COUNT as f64 * 100.0;
        let status = if success { "completed" } else { "failed" };
        tracing::info!("[{progress:.1}%] {status} stage: {stage} in {elapsed:.2}s");
    }

    /// Timing summary over the stages recorded so far.
    pub fn summary(&self) -> StageSummary {
        let total_time: f64 = self.elapsed.values().sum();
        let stage_times: HashMap<String, f64> = self
            .elapsed
            .iter()
            .map(|(stage, secs)| (stage.to_string(), *secs))
            .collect();
        let stage_percentages = if total_time > 0.0 {
            stage_times
                .iter()
                .map(|(name, secs)| (name.clone(), secs / total_time * 100.0))
                .collect()
        } else {
            HashMap::new()
        };
        StageSummary {
            total_time,
            stage_times,
            stage_percentages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names_are_snake_case() {
        assert_eq!(Stage::InputProcessing.to_string(), "input_processing");
        assert_eq!(Stage::MediaProduction.to_string(), "media_production");
    }

    #[test]
    fn failed_stages_still_contribute_timing() {
        let mut tracker = StageTracker::new();
        tracker.start(Stage::InputProcessing);
        tracker.end(Stage::InputProcessing);
        tracker.start(Stage::ProblemSolving);
        tracker.fail(Stage::ProblemSolving);

        let summary = tracker.summary();
        assert_eq!(summary.stage_times.len(), 2);
        assert!(summary.stage_times.contains_key("problem_solving"));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let mut tracker = StageTracker::new();
        tracker.start(Stage::InputProcessing);
        tracker.end(Stage::InputProcessing);
        tracker.start(Stage::ProblemSolving);
        tracker.end(Stage::ProblemSolving);

        let summary = tracker.summary();
        let total: f64 = summary.stage_percentages.values().sum();
        assert!((total - 100.0).abs() < 1e-6);
    }

    #[test]
    fn ending_an_unstarted_stage_is_harmless() {
        let mut tracker = StageTracker::new();
        tracker.end(Stage::MediaProduction);
        assert!(tracker.summary().stage_times.is_empty());
    }
}
