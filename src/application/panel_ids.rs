// Panel identifier sequence - Run-wide, monotonically increasing panel ids
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct PanelIdSequence {
    last: AtomicU64,
}

impl PanelIdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier; the first one handed out is 1
    pub fn next_id(&self) -> u64 {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }
}
