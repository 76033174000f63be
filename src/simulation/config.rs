//! Construction parameters for a simulation run

use thiserror::Error;

use super::types::{DEFAULT_DURATION, DEFAULT_INTERSECTION_COUNT};

/// Rejected construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("duration must be at least one time step")]
    ZeroDuration,
    #[error("at least one intersection is required")]
    ZeroIntersections,
}

/// Parameters of a simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of navigable time steps
    pub duration: usize,
    /// Number of intersections (one light and one sign each)
    pub intersection_count: usize,
    /// Seed for the density sampler; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            intersection_count: DEFAULT_INTERSECTION_COUNT,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn new(duration: usize, intersection_count: usize) -> Self {
        Self {
            duration,
            intersection_count,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.intersection_count == 0 {
            return Err(ConfigError::ZeroIntersections);
        }
        Ok(())
    }
}
