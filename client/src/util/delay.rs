//! Timer helper for the short pauses in login and upload flows.

use std::time::Duration;

/// Wait `millis` in the browser; resolves immediately elsewhere.
pub async fn sleep_ms(millis: u64) {
    let duration = Duration::from_millis(millis);
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = duration;
}
