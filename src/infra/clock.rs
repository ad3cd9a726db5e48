use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::application::ports::delay::DelayProvider;

pub const LATENCY_RANGE_MS: RangeInclusive<u64> = 300..=850;
pub const DISABLE_RANGE_MS: RangeInclusive<u64> = 350..=900;
pub const TEST_DISABLE_MS: u64 = 50;

/// Human-feeling latency: uniform random milliseconds within fixed ranges.
#[derive(Debug, Clone)]
pub struct RandomizedDelay {
    latency_ms: RangeInclusive<u64>,
    disable_ms: RangeInclusive<u64>,
}

impl Default for RandomizedDelay {
    fn default() -> Self {
        Self {
            latency_ms: LATENCY_RANGE_MS,
            disable_ms: DISABLE_RANGE_MS,
        }
    }
}

fn pick(range: &RangeInclusive<u64>) -> Duration {
    let ms = rand::thread_rng().gen_range(range.clone());
    Duration::from_millis(ms)
}

#[async_trait]
impl DelayProvider for RandomizedDelay {
    fn latency(&self) -> Duration {
        pick(&self.latency_ms)
    }

    fn disable_window(&self) -> Duration {
        pick(&self.disable_ms)
    }

    fn is_test_mode(&self) -> bool {
        false
    }
}

/// Test mode: no added latency, a short fixed disable window.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantDelay;

#[async_trait]
impl DelayProvider for InstantDelay {
    fn latency(&self) -> Duration {
        Duration::ZERO
    }

    fn disable_window(&self) -> Duration {
        Duration::from_millis(TEST_DISABLE_MS)
    }

    fn is_test_mode(&self) -> bool {
        true
    }
}

pub fn delay_provider(test_mode: bool) -> Arc<dyn DelayProvider> {
    if test_mode {
        Arc::new(InstantDelay)
    } else {
        Arc::new(RandomizedDelay::default())
    }
}
