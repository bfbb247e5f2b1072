//! Simulated slow data source.
//!
//! The delay runs on the tokio timer, so tests can pause the clock and
//! let it jump forward instead of actually waiting.

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

/// How long [`fetch_data`] takes to answer.
pub const FETCH_LATENCY: Duration = Duration::from_millis(100);

/// Resolves to a short list of numbers after [`FETCH_LATENCY`].
pub async fn fetch_data() -> Vec<i64> {
    sleep(FETCH_LATENCY).await;
    let data = vec![1, 2, 3];
    debug!(len = data.len(), "Fetched data");
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Instant};

    #[tokio::test(start_paused = true)]
    async fn test_fetch_data_resolves_to_numbers() {
        let started = Instant::now();

        let data = fetch_data().await;

        assert!(!data.is_empty());
        assert!(started.elapsed() >= FETCH_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_data_not_ready_before_latency() {
        let result = timeout(FETCH_LATENCY / 2, fetch_data()).await;
        assert!(result.is_err());
    }
}
