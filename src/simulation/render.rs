//! The drawing seam between the simulation and whatever shows it

use super::light::TrafficLight;
use super::sign::TrafficSign;

/// Draws the current state after every step.
///
/// Called synchronously with index-aligned lights and signs. Implementations
/// own their drawing surface.
pub trait Renderer {
    fn draw(&mut self, lights: &[TrafficLight], signs: &[TrafficSign], time: usize);
}

/// Draws nothing, used for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _lights: &[TrafficLight], _signs: &[TrafficSign], _time: usize) {}
}
