//! Advisory signs shown next to each light

use std::fmt;

use super::types::{Density, IntersectionId, CONGESTION_THRESHOLD, MODERATE_THRESHOLD};

/// Traffic status message displayed by a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignMessage {
    Clear,
    Moderate,
    Congested,
}

impl SignMessage {
    /// Message band for a density sample
    pub fn for_density(density: Density) -> Self {
        if density > CONGESTION_THRESHOLD {
            SignMessage::Congested
        } else if density > MODERATE_THRESHOLD {
            SignMessage::Moderate
        } else {
            SignMessage::Clear
        }
    }

    /// The display color that goes with this message
    pub fn color(self) -> SignColor {
        match self {
            SignMessage::Clear => SignColor::Blue,
            SignMessage::Moderate => SignColor::Green,
            SignMessage::Congested => SignColor::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SignMessage::Clear => "clear",
            SignMessage::Moderate => "moderate",
            SignMessage::Congested => "congested",
        }
    }

    /// Korean text as printed on the physical boards
    pub fn hangul(self) -> &'static str {
        match self {
            SignMessage::Clear => "쾌적",
            SignMessage::Moderate => "보통",
            SignMessage::Congested => "혼잡",
        }
    }
}

impl fmt::Display for SignMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignColor {
    Blue,
    Green,
    Red,
}

impl fmt::Display for SignColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignColor::Blue => "blue",
            SignColor::Green => "green",
            SignColor::Red => "red",
        })
    }
}

/// A sign at one intersection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficSign {
    pub id: IntersectionId,
    pub location: String,
    pub message: SignMessage,
    pub color: SignColor,
}

impl TrafficSign {
    pub fn new(id: IntersectionId) -> Self {
        Self {
            id,
            location: format!("Intersection {}", id),
            message: SignMessage::Clear,
            color: SignColor::Blue,
        }
    }

    /// Recompute message and color from a density sample
    pub fn update(&mut self, density: Density) {
        self.message = SignMessage::for_density(density);
        self.color = self.message.color();
    }
}

impl fmt::Display for TrafficSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sign: {}", self.location, self.message)
    }
}
