//! Engine configuration.
//!
//! The only knob is the seed. A fixed seed gives a reproducible stream;
//! leaving it unset derives one from the system clock. With the `serde`
//! feature enabled the config can be embedded in a host application's own
//! configuration file.

use std::time::{SystemTime, UNIX_EPOCH};

/// Fallback seed when the system clock reads before the Unix epoch.
const FALLBACK_SEED: u64 = 5489;

/// Configuration for a [`RandomEngine`](crate::RandomEngine).
///
/// # Examples
/// ```
/// use seedsample::{EngineConfig, RandomEngine};
///
/// let config = EngineConfig::with_seed(99);
/// let mut a = RandomEngine::from_config(&config);
/// let mut b = RandomEngine::from_config(&config);
/// assert_eq!(a.uniform_double(), b.uniform_double());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Fixed seed; `None` derives one from the clock.
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Returns the configured seed, or a clock-derived one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }
}

/// Seed derived from the current time in nanoseconds since the epoch.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(FALLBACK_SEED)
}
