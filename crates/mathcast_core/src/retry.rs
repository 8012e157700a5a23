//! Retry budget for the render-repair cycle.

use serde::{Deserialize, Serialize};

/// Budget for AI-assisted render repair cycles.
///
/// `Bounded(n)` permits `n` repair cycles, i.e. at most `n + 1` render
/// attempts in total. `Unbounded` places no count ceiling; the cycle still
/// terminates on a successful render or a repair refusal.
///
/// # Examples
///
/// ```
/// use mathcast_core::RetryBudget;
///
/// let budget = RetryBudget::Bounded(2);
/// assert!(budget.permits_repair(0));
/// assert!(budget.permits_repair(1));
/// assert!(!budget.permits_repair(2));
///
/// assert!(RetryBudget::Unbounded.permits_repair(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetryBudget {
    /// At most this many repair cycles
    Bounded(u32),
    /// No count ceiling; termination relies on success or refusal
    Unbounded,
}

impl RetryBudget {
    /// Whether another repair cycle is permitted after `repairs_used` cycles.
    pub fn permits_repair(&self, repairs_used: u32) -> bool {
        match self {
            RetryBudget::Bounded(max) => repairs_used < *max,
            RetryBudget::Unbounded => true,
        }
    }
}

impl Default for RetryBudget {
    /// Two repair cycles, three render attempts in total.
    fn default() -> Self {
        RetryBudget::Bounded(2)
    }
}

impl From<Option<u32>> for RetryBudget {
    /// `None` means unlimited, matching the CLI's absent `--max-retries`.
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(n) => RetryBudget::Bounded(n),
            None => RetryBudget::Unbounded,
        }
    }
}
