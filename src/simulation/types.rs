//! Core types for the traffic timeline
//!
//! These are standalone types that don't depend on any UI.

use std::fmt;

/// Traffic density at one intersection for one step
pub type Density = u32;

/// A wrapper type for intersection IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntersectionId(pub usize);

impl fmt::Display for IntersectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Highest density a sampler produces (inclusive)
pub const DENSITY_MAX: Density = 10;

/// Densities above this are congested and force a light green
pub const CONGESTION_THRESHOLD: Density = 7;

/// Densities above this (and not congested) are moderate
pub const MODERATE_THRESHOLD: Density = 3;

/// Number of ticks a light phase lasts before it flips on its own
pub const LIGHT_PHASE_TICKS: u32 = 30;

/// Default number of navigable time steps
pub const DEFAULT_DURATION: usize = 100;

/// Default number of intersections
pub const DEFAULT_INTERSECTION_COUNT: usize = 5;
