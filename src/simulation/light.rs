//! Traffic light logic for the timeline simulation
//!
//! A light is a two-phase state machine. Density can override the phase,
//! and every step the phase timer counts down and flips the light at zero.

use std::fmt;

use super::types::{Density, IntersectionId, CONGESTION_THRESHOLD, LIGHT_PHASE_TICKS};

/// The color currently shown by a light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Red,
    Green,
}

impl LightState {
    /// The opposite phase
    pub fn flipped(self) -> Self {
        match self {
            LightState::Red => LightState::Green,
            LightState::Green => LightState::Red,
        }
    }

    /// Upper-case label used in status lines and the terminal view
    pub fn label(self) -> &'static str {
        match self {
            LightState::Red => "RED",
            LightState::Green => "GREEN",
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a call to [`TrafficLight::update`] or [`TrafficLight::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightChange {
    /// Phase kept; a tick still counts the timer down
    Unchanged,
    /// Density forced a different phase
    Overridden,
    /// The timer ran out and the phase flipped
    Flipped,
}

/// A traffic light at one intersection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficLight {
    pub id: IntersectionId,
    pub state: LightState,
    /// Ticks left in the current phase, always within `0..=LIGHT_PHASE_TICKS`
    pub timer: u32,
}

impl TrafficLight {
    pub fn new(id: IntersectionId) -> Self {
        Self {
            id,
            state: LightState::Red,
            timer: LIGHT_PHASE_TICKS,
        }
    }

    /// Apply a density sample.
    ///
    /// Congested traffic wants green, anything else wants red. The phase
    /// (and its timer) is only reset when the wanted color differs from the
    /// current one, so sustained density does not keep restarting the timer.
    pub fn update(&mut self, density: Density) -> LightChange {
        let wanted = if density > CONGESTION_THRESHOLD {
            LightState::Green
        } else {
            LightState::Red
        };

        if self.state == wanted {
            return LightChange::Unchanged;
        }

        self.state = wanted;
        self.timer = LIGHT_PHASE_TICKS;
        LightChange::Overridden
    }

    /// Advance the phase timer by one step
    pub fn tick(&mut self) -> LightChange {
        self.timer = self.timer.saturating_sub(1);

        if self.timer == 0 {
            self.state = self.state.flipped();
            self.timer = LIGHT_PHASE_TICKS;
            return LightChange::Flipped;
        }

        LightChange::Unchanged
    }

    pub fn is_green(&self) -> bool {
        self.state == LightState::Green
    }
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Intersection {} light: {}, timer: {}",
            self.id, self.state, self.timer
        )
    }
}
