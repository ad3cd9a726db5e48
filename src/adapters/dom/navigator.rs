use std::sync::Mutex;

use crate::application::ports::navigator::Navigator;

/// The tab's location bar. Navigation is recorded, the caller performs it.
#[derive(Default)]
pub struct BrowserLocation {
    pending: Mutex<Option<String>>,
}

impl BrowserLocation {
    /// The target of the latest navigation, clearing it.
    pub fn take_pending(&self) -> Option<String> {
        self.pending.lock().ok().and_then(|mut pending| pending.take())
    }

    pub fn is_navigating(&self) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.is_some())
            .unwrap_or(false)
    }
}

impl Navigator for BrowserLocation {
    fn navigate(&self, target: &str) {
        tracing::info!(destination = target, "Navigating");
        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(target.to_string());
        }
    }
}
