//! Global loading flag with flicker smoothing.

use std::time::Duration;

use dioxus::prelude::*;

/// Delay before the flag actually clears, so operations finishing quickly
/// after one another do not make the indicator flicker.
const FINISH_DELAY: Duration = Duration::from_millis(200);

/// Every `start` opens a new generation; a pending delayed clear only
/// applies if no newer generation opened in the meantime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlobalLoading {
    pub active: bool,
    generation: u64,
}

impl GlobalLoading {
    fn started(self) -> Self {
        Self {
            active: true,
            generation: self.generation + 1,
        }
    }

    fn finished(self, scheduled: u64) -> Self {
        if self.generation == scheduled {
            Self {
                active: false,
                ..self
            }
        } else {
            self
        }
    }
}

/// Consume the global loading signal from context.
pub fn use_loading() -> Signal<GlobalLoading> {
    use_context::<Signal<GlobalLoading>>()
}

/// Raise the loading flag immediately.
pub fn start_loading(mut loading: Signal<GlobalLoading>) {
    let next = loading.peek().started();
    loading.set(next);
}

/// Clear the loading flag after the smoothing delay. A `start_loading` call
/// in the meantime opens a new generation and the pending clear is discarded.
pub fn finish_loading(mut loading: Signal<GlobalLoading>) {
    let scheduled = loading.peek().generation;
    spawn(async move {
        crate::time::sleep(FINISH_DELAY).await;
        let next = loading.peek().finished(scheduled);
        loading.set(next);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_clears_its_own_generation() {
        let state = GlobalLoading::default().started();
        assert!(state.active);
        let state = state.finished(state.generation);
        assert!(!state.active);
    }

    #[test]
    fn test_restart_during_finish_window_keeps_flag_raised() {
        let first = GlobalLoading::default().started();
        let scheduled = first.generation;
        // a second operation starts before the first clear fires
        let second = first.started();
        let after_stale_clear = second.finished(scheduled);
        assert!(after_stale_clear.active);
        // the second operation's own clear still applies
        let settled = after_stale_clear.finished(after_stale_clear.generation);
        assert!(!settled.active);
    }
}
