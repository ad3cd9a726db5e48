//! Recording and failing implementations of the application ports.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::{
        control::Control, delay::DelayProvider, key_value_store::KeyValueStore,
        navigator::Navigator,
    },
};

/// Storage whose writes always fail, like a full browser quota.
pub struct FailingStorage;

impl KeyValueStore for FailingStorage {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Storage("quota exceeded".into()))
    }
}

/// Navigator that remembers every target instead of leaving the page.
#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        self.visited.lock().unwrap().push(target.to_string());
    }
}

/// Control that records each disabled/enabled transition.
#[derive(Default)]
pub struct RecordingControl {
    history: Mutex<Vec<bool>>,
}

impl RecordingControl {
    pub fn is_disabled(&self) -> bool {
        self.history.lock().unwrap().last().copied().unwrap_or(false)
    }

    pub fn history(&self) -> Vec<bool> {
        self.history.lock().unwrap().clone()
    }
}

impl Control for RecordingControl {
    fn set_disabled(&self, disabled: bool) {
        self.history.lock().unwrap().push(disabled);
    }
}

/// Deterministic delays.
pub struct FixedDelay {
    latency: Duration,
    disable_window: Duration,
    test_mode: bool,
}

impl FixedDelay {
    pub fn new(latency: Duration, disable_window: Duration) -> Self {
        Self {
            latency,
            disable_window,
            test_mode: false,
        }
    }

    /// Zero delays, reported as test mode.
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
            disable_window: Duration::ZERO,
            test_mode: true,
        }
    }
}

#[async_trait]
impl DelayProvider for FixedDelay {
    fn latency(&self) -> Duration {
        self.latency
    }

    fn disable_window(&self) -> Duration {
        self.disable_window
    }

    fn is_test_mode(&self) -> bool {
        self.test_mode
    }
}
