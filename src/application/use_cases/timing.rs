use std::sync::Arc;

use tokio::{runtime::Handle, task::JoinHandle};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::{control::Control, delay::DelayProvider},
};

/// Artificial latency for UI polish, backed by an injected `DelayProvider`.
#[derive(Clone)]
pub struct Timing {
    delays: Arc<dyn DelayProvider>,
}

impl Timing {
    pub fn new(delays: Arc<dyn DelayProvider>) -> Self {
        Self { delays }
    }

    pub fn is_test_mode(&self) -> bool {
        self.delays.is_test_mode()
    }

    /// Suspend the caller for one simulated network round trip.
    #[instrument(skip(self))]
    pub async fn simulated_delay(&self) {
        let latency = self.delays.latency();
        tracing::trace!(latency_ms = latency.as_millis() as u64, "Simulating latency");
        self.delays.sleep(latency).await;
    }

    /// Disable `control` now and re-enable it once the disable window elapses.
    ///
    /// The returned handle may be dropped; the timer still runs to completion.
    /// Outside a Tokio runtime this fails and the control is left untouched.
    pub fn temporarily_disable(&self, control: Arc<dyn Control>) -> AppResult<JoinHandle<()>> {
        let runtime = Handle::try_current()
            .map_err(|e| AppError::Internal(format!("no runtime for re-enable timer: {e}")))?;

        control.set_disabled(true);

        let window = self.delays.disable_window();
        let delays = self.delays.clone();
        Ok(runtime.spawn(async move {
            delays.sleep(window).await;
            control.set_disabled(false);
        }))
    }
}
