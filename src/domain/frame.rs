/// Counts display frames up to a fixed limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCounter {
    current: usize,
    limit: usize,
}

impl FrameCounter {
    pub fn new(limit: usize) -> Self {
        Self { current: 0, limit }
    }

    /// Number of frames already handed out.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_exhausted(&self) -> bool {
        self.current >= self.limit
    }

    /// Returns the zero-based index of the next frame and advances,
    /// or `None` once the limit is reached.
    pub fn next_frame(&mut self) -> Option<usize> {
        if self.is_exhausted() {
            return None;
        }
        let frame = self.current;
        self.current += 1;
        Some(frame)
    }
}
