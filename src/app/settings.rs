use std::time::Duration;

/// Frames shown per run.
pub const FRAME_COUNT: usize = 50;

/// Time each glyph stays on screen before it is erased.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinnerSettings {
    pub frame_count: usize,
    pub frame_interval: Duration,
}

impl Default for SpinnerSettings {
    fn default() -> Self {
        Self {
            frame_count: FRAME_COUNT,
            frame_interval: FRAME_INTERVAL,
        }
    }
}

impl SpinnerSettings {
    /// Nominal run time, ignoring write and scheduling overhead.
    pub fn total_duration(&self) -> Duration {
        u32::try_from(self.frame_count)
            .map_or(Duration::MAX, |count| self.frame_interval.saturating_mul(count))
    }
}
