//! Per-operation model usage accounting.

use mathcast_interface::ModelUsage;
use std::collections::HashMap;
use std::sync::Mutex;

/// Thread-safe usage accumulator keyed by operation name.
///
/// Operations are the capability names ("explain", "plan", ...); the
/// snapshot lands in the run metrics under `model_usage`.
#[derive(Debug, Default)]
pub struct UsageTracker {
    records: Mutex<HashMap<String, ModelUsage>>,
}

impl UsageTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed call against an operation.
    pub fn record(&self, operation: &str, prompt_tokens: u64, completion_tokens: u64) {
        let mut records = self.records.lock().expect("usage lock poisoned");
        let record = records.entry(operation.to_string()).or_default();
        record.calls += 1;
        record.prompt_tokens += prompt_tokens;
        record.completion_tokens += completion_tokens;
    }

    /// Returns a copy of the accumulated records.
    pub fn snapshot(&self) -> HashMap<String, ModelUsage> {
        self.records.lock().expect("usage lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_accumulate_per_operation() {
        let tracker = UsageTracker::new();
        tracker.record("explain", 100, 200);
        tracker.record("explain", 10, 20);
        tracker.record("plan", 5, 5);

        let snapshot = tracker.snapshot();
        assert_eq!(
            snapshot["explain"],
            ModelUsage {
                calls: 2,
                prompt_tokens: 110,
                completion_tokens: 220,
            }
        );
        assert_eq!(snapshot["plan"].calls, 1);
    }
}
