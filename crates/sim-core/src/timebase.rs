use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Monotonic clock anchored at construction.
///
/// Used only for audit timestamps and pacing diagnostics. Simulated
/// values never read it: simulated time advances in fixed `DT_S` steps
/// per tick, which keeps runs reproducible at any driving pace.
#[derive(Debug, Clone, Copy)]
pub struct TimeBase {
    start: Instant,
}

impl TimeBase {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Monotonic microseconds since construction.
    pub fn now_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }

    /// Wall-clock microseconds since the Unix epoch, for cross-run log
    /// correlation only.
    pub fn unix_us(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_micros() as u64
    }
}

impl Default for TimeBase {
    fn default() -> Self {
        Self::new()
    }
}
