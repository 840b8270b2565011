//! Debounced scheduling: run an effect only after a period of quiescence.
//!
//! Every call to [`Debouncer::wait`] starts a new generation and invalidates
//! all pending ones; a schedule that has been superseded before its delay
//! elapsed is simply discarded. This is the guard behind the 500 ms search
//! debounce.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Fixed delay applied to reactive search inputs.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait out the quiescence window. Returns `true` only if no newer call
    /// superseded this one in the meantime; the caller skips its effect on
    /// `false`.
    pub async fn wait(&self, delay: Duration) -> bool {
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        crate::time::sleep(delay).await;
        self.generation.load(Ordering::SeqCst) == scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lone_schedule_fires() {
        let debouncer = Debouncer::new();
        assert!(debouncer.wait(Duration::from_millis(10)).await);
    }

    #[tokio::test]
    async fn test_rapid_schedules_coalesce_to_last() {
        let debouncer = Debouncer::new();
        // three schedules within one window: only the last may fire
        let first = debouncer.wait(Duration::from_millis(30));
        let second = debouncer.wait(Duration::from_millis(30));
        let third = debouncer.wait(Duration::from_millis(30));
        let (first, second, third) = futures::join!(first, second, third);
        assert!(!first);
        assert!(!second);
        assert!(third);
    }

    #[tokio::test]
    async fn test_settled_window_fires_again() {
        let debouncer = Debouncer::new();
        assert!(debouncer.wait(Duration::from_millis(5)).await);
        assert!(debouncer.wait(Duration::from_millis(5)).await);
    }
}
