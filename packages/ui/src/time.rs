//! Platform-appropriate async sleep.

use std::time::Duration;

/// Sleep on the browser event loop (wasm) or the tokio timer (native).
pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
