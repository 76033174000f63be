//! Traffic density sources
//!
//! Every step draws one density per intersection. The source is a trait so
//! tests can feed exact sequences instead of random ones.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::types::{Density, DENSITY_MAX};

/// Produces one density value per intersection for a step
pub trait DensitySampler {
    /// Returns exactly `count` densities, each within `0..=DENSITY_MAX`
    fn sample(&mut self, count: usize) -> Vec<Density>;
}

/// Uniform random densities
pub struct RandomDensity {
    /// Optional seeded RNG for reproducible runs
    rng: Option<StdRng>,
}

impl Default for RandomDensity {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomDensity {
    /// Sampler backed by the thread-local RNG
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Sampler backed by a seeded RNG
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    fn random_density(&mut self) -> Density {
        match &mut self.rng {
            Some(rng) => rng.random_range(0..=DENSITY_MAX),
            None => rand::rng().random_range(0..=DENSITY_MAX),
        }
    }
}

impl DensitySampler for RandomDensity {
    fn sample(&mut self, count: usize) -> Vec<Density> {
        (0..count).map(|_| self.random_density()).collect()
    }
}

/// Replays a fixed list of samples, one row per step.
///
/// Once the rows run out the last row repeats. Rows shorter than the
/// intersection count are padded with zero, longer rows are truncated, and
/// values above `DENSITY_MAX` are clamped.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDensity {
    rows: VecDeque<Vec<Density>>,
    last: Vec<Density>,
}

impl ScriptedDensity {
    pub fn new<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Density>>,
    {
        Self {
            rows: rows.into_iter().collect(),
            last: Vec::new(),
        }
    }

    /// Queue another row after the existing ones
    pub fn push(&mut self, row: Vec<Density>) {
        self.rows.push_back(row);
    }

    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl DensitySampler for ScriptedDensity {
    fn sample(&mut self, count: usize) -> Vec<Density> {
        if let Some(row) = self.rows.pop_front() {
            self.last = row;
        }

        let mut row: Vec<Density> = self
            .last
            .iter()
            .map(|d| (*d).min(DENSITY_MAX))
            .take(count)
            .collect();
        row.resize(count, 0);
        row
    }
}
