#[cfg(test)]
#[path = "../../tests/unit/statistics/running_test.rs"]
mod running_test;

use crate::models::Candidate;
use crate::utils::Float;

/// Keeps the best candidate observed so far together with cumulative counters which are used to
/// calculate running averages without keeping per generation history.
#[derive(Clone, Debug, Default)]
pub struct RunningBest {
    best: Option<Candidate>,
    total_size: u64,
    total_count: u64,
}

impl RunningBest {
    /// Returns the best candidate seen so far.
    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    /// Accumulates counters of evaluated candidates.
    pub fn accumulate(&mut self, count: u64, total_size: u64) {
        self.total_count += count;
        self.total_size += total_size;
    }

    /// Replaces the stored best with a copy of the given candidate if there is no best yet or the
    /// candidate is strictly better. Returns true if the best was replaced.
    pub fn offer(&mut self, candidate: Option<&Candidate>) -> bool {
        match (candidate, self.best.as_ref()) {
            (Some(candidate), Some(best)) if !candidate.fitness.better_than(&best.fitness) => false,
            (Some(candidate), _) => {
                self.best = Some(candidate.deep_copy());
                true
            }
            (None, _) => false,
        }
    }

    /// Returns total amount of evaluated candidates observed.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Returns total size of evaluated candidates observed.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Returns mean size of evaluated candidates observed so far, zero if none.
    pub fn mean_size(&self) -> Float {
        mean(self.total_size as Float, self.total_count)
    }
}

pub(crate) fn mean(total: Float, count: u64) -> Float {
    if count > 0 { total / count as Float } else { 0. }
}
