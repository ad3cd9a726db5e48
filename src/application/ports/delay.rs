use std::time::Duration;

use async_trait::async_trait;

/// Source of artificial latency, chosen once per page load.
#[async_trait]
pub trait DelayProvider: Send + Sync {
    /// How long a simulated network round trip takes.
    fn latency(&self) -> Duration;

    /// How long a pressed control stays disabled.
    fn disable_window(&self) -> Duration;

    fn is_test_mode(&self) -> bool;

    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
