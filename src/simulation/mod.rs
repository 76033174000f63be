//! Standalone traffic timeline module
//!
//! This module contains all the core simulation logic (lights, signs,
//! density sampling and timeline navigation). It runs without any UI and
//! can be tested from the console.

mod config;
mod density;
mod light;
mod observer;
mod render;
mod sign;
mod timeline;
mod types;

pub use config::{ConfigError, SimConfig};
pub use density::{DensitySampler, RandomDensity, ScriptedDensity};
pub use light::{LightChange, LightState, TrafficLight};
pub use observer::{LogObserver, NullObserver, SimObserver};
pub use render::{NullRenderer, Renderer};
pub use sign::{SignColor, SignMessage, TrafficSign};
pub use timeline::{Timeline, TimelineSummary};
pub use types::{
    Density, IntersectionId, CONGESTION_THRESHOLD, DEFAULT_DURATION,
    DEFAULT_INTERSECTION_COUNT, DENSITY_MAX, LIGHT_PHASE_TICKS, MODERATE_THRESHOLD,
};
