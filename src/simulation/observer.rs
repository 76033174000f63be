//! Observability hooks for simulation steps
//!
//! State transitions stay free of output. Whatever wants to report on a
//! step implements [`SimObserver`] and is handed to the timeline.

use log::{debug, info};

use super::light::TrafficLight;
use super::sign::TrafficSign;
use super::types::Density;

/// Receives notifications while a step runs. All hooks default to no-ops.
pub trait SimObserver {
    /// A fresh sample was drawn for the step at `time`
    fn on_step_started(&mut self, _time: usize, _densities: &[Density]) {}

    /// A light was updated from its density sample
    fn on_light_updated(&mut self, _light: &TrafficLight) {}

    /// A sign was updated from its density sample
    fn on_sign_updated(&mut self, _sign: &TrafficSign) {}

    /// A light's timer ran out and its phase flipped during the tick
    fn on_light_flipped(&mut self, _light: &TrafficLight) {}
}

/// Discards every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SimObserver for NullObserver {}

/// Emits one status line per light and per sign through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SimObserver for LogObserver {
    fn on_step_started(&mut self, time: usize, densities: &[Density]) {
        debug!("Step at t={} with densities {:?}", time, densities);
    }

    fn on_light_updated(&mut self, light: &TrafficLight) {
        info!("{}", light);
    }

    fn on_sign_updated(&mut self, sign: &TrafficSign) {
        info!("{}", sign);
    }

    fn on_light_flipped(&mut self, light: &TrafficLight) {
        debug!("Intersection {} phase flipped to {}", light.id, light.state);
    }
}
