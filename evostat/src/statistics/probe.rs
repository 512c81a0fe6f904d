#[cfg(test)]
#[path = "../../tests/unit/statistics/probe_test.rs"]
mod probe_test;

use crate::utils::Timer;

/// Reads process-wide resource counters used for timing and memory instrumentation.
pub trait ResourceProbe: Send + Sync {
    /// Returns elapsed milliseconds since some fixed point in time.
    fn elapsed_millis(&self) -> i64;

    /// Returns current memory usage in bytes. The value is approximate and deltas between two
    /// readings may be negative.
    fn memory_usage(&self) -> i64;
}

/// A probe which uses a monotonic timer and resident set size of the process.
pub struct SystemProbe {
    timer: Timer,
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self { timer: Timer::start() }
    }
}

impl ResourceProbe for SystemProbe {
    fn elapsed_millis(&self) -> i64 {
        self.timer.elapsed_millis() as i64
    }

    fn memory_usage(&self) -> i64 {
        resident_memory().unwrap_or(0)
    }
}

#[cfg(target_os = "linux")]
fn resident_memory() -> Option<i64> {
    const PAGE_SIZE: i64 = 4096;

    let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
    let pages = statm.split_whitespace().nth(1)?.parse::<i64>().ok()?;

    Some(pages * PAGE_SIZE)
}

#[cfg(not(target_os = "linux"))]
fn resident_memory() -> Option<i64> {
    None
}
