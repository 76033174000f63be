//! Timeline that drives the simulation
//!
//! This is the entry point for stepping the lights and signs without any
//! UI dependencies. Navigation moves a bounded cursor over `0..duration` and
//! every successful move runs one step: sample, update, tick, draw.

use log::{debug, info};

use super::config::{ConfigError, SimConfig};
use super::density::{DensitySampler, RandomDensity};
use super::light::{LightChange, TrafficLight};
use super::observer::{LogObserver, SimObserver};
use super::render::{NullRenderer, Renderer};
use super::sign::{SignMessage, TrafficSign};
use super::types::{IntersectionId, LIGHT_PHASE_TICKS};

/// Aggregate view of the current state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineSummary {
    pub current_time: usize,
    pub duration: usize,
    /// Steps run since construction, including refreshes
    pub steps_run: usize,
    pub green_lights: usize,
    pub total_lights: usize,
    pub congested_signs: usize,
    pub moderate_signs: usize,
    pub clear_signs: usize,
}

/// Owns the intersections and walks them through time
pub struct Timeline {
    duration: usize,
    current_time: usize,
    steps_run: usize,

    /// One light per intersection, index-aligned with `signs`
    lights: Vec<TrafficLight>,
    signs: Vec<TrafficSign>,

    sampler: Box<dyn DensitySampler>,
    renderer: Box<dyn Renderer>,
    observer: Box<dyn SimObserver>,
}

impl Timeline {
    /// Build a timeline from validated parameters.
    ///
    /// Densities come from a random sampler (seeded when the config carries a
    /// seed), nothing is drawn, and status lines go to the log.
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let sampler = match config.seed {
            Some(seed) => RandomDensity::with_seed(seed),
            None => RandomDensity::new(),
        };

        let lights = (0..config.intersection_count)
            .map(|i| TrafficLight::new(IntersectionId(i)))
            .collect();
        let signs = (0..config.intersection_count)
            .map(|i| TrafficSign::new(IntersectionId(i)))
            .collect();

        debug!(
            "Created timeline: duration={}, intersections={}, seed={:?}",
            config.duration, config.intersection_count, config.seed
        );

        Ok(Self {
            duration: config.duration,
            current_time: 0,
            steps_run: 0,
            lights,
            signs,
            sampler: Box::new(sampler),
            renderer: Box::new(NullRenderer),
            observer: Box::new(LogObserver),
        })
    }

    /// Replace the density source
    pub fn with_sampler(mut self, sampler: impl DensitySampler + 'static) -> Self {
        self.sampler = Box::new(sampler);
        self
    }

    /// Replace the renderer called after each step
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Replace the observer notified during each step
    pub fn with_observer(mut self, observer: impl SimObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn current_time(&self) -> usize {
        self.current_time
    }

    pub fn duration(&self) -> usize {
        self.duration
    }

    pub fn lights(&self) -> &[TrafficLight] {
        &self.lights
    }

    pub fn signs(&self) -> &[TrafficSign] {
        &self.signs
    }

    pub fn intersection_count(&self) -> usize {
        self.lights.len()
    }

    pub fn at_start(&self) -> bool {
        self.current_time == 0
    }

    pub fn at_end(&self) -> bool {
        self.current_time + 1 >= self.duration
    }

    /// Move one step forward and simulate.
    ///
    /// Returns false without touching anything when already at the last
    /// time step.
    pub fn advance(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.current_time += 1;
        self.step();
        true
    }

    /// Move one step back and simulate.
    ///
    /// Going back does not restore earlier state: the entities keep their
    /// current state and a fresh sample is applied on top of it.
    pub fn retreat(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.current_time -= 1;
        self.step();
        true
    }

    /// Simulate one step at the current time without moving
    pub fn refresh(&mut self) {
        self.step();
    }

    fn step(&mut self) {
        let count = self.lights.len();
        let densities = self.sampler.sample(count);
        self.observer.on_step_started(self.current_time, &densities);

        for (light, density) in self.lights.iter_mut().zip(&densities) {
            light.update(*density);
            self.observer.on_light_updated(light);
        }

        for (sign, density) in self.signs.iter_mut().zip(&densities) {
            sign.update(*density);
            self.observer.on_sign_updated(sign);
        }

        for light in &mut self.lights {
            if light.tick() == LightChange::Flipped {
                self.observer.on_light_flipped(light);
            }
            debug_assert!(light.timer <= LIGHT_PHASE_TICKS);
        }

        self.steps_run += 1;
        self.renderer
            .draw(&self.lights, &self.signs, self.current_time);
    }

    pub fn summary(&self) -> TimelineSummary {
        let count_signs = |message: SignMessage| {
            self.signs.iter().filter(|s| s.message == message).count()
        };

        TimelineSummary {
            current_time: self.current_time,
            duration: self.duration,
            steps_run: self.steps_run,
            green_lights: self.lights.iter().filter(|l| l.is_green()).count(),
            total_lights: self.lights.len(),
            congested_signs: count_signs(SignMessage::Congested),
            moderate_signs: count_signs(SignMessage::Moderate),
            clear_signs: count_signs(SignMessage::Clear),
        }
    }

    /// Log a summary of the timeline state
    pub fn log_summary(&self) {
        let summary = self.summary();
        info!("=== Traffic Timeline Summary ===");
        info!("Time: {}/{}", summary.current_time, summary.duration - 1);
        info!("Steps run: {}", summary.steps_run);
        info!(
            "Green lights: {}/{}",
            summary.green_lights, summary.total_lights
        );
        info!(
            "Signs: congested={}, moderate={}, clear={}",
            summary.congested_signs, summary.moderate_signs, summary.clear_signs
        );
    }
}
