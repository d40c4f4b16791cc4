//! Attribute generators - color, energy, physique
//!
//! Every attribute reads its own offsets so no two draws share a key.

use serde::{Deserialize, Serialize};

use crate::rng::SeededDraws;

pub(crate) const HUE_OFFSET: u32 = 1;
pub(crate) const SATURATION_OFFSET: u32 = 2;
pub(crate) const LIGHTNESS_OFFSET: u32 = 3;
pub(crate) const ENERGY_OFFSET: u32 = 4;
pub(crate) const BUILD_OFFSET: u32 = 5;

/// Avatar color in HSL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    /// 0..=359
    pub hue: u16,
    /// 60..=99
    pub saturation: u8,
    /// 40..=59
    pub lightness: u8,
}

impl ColorSpec {
    /// Draw hue, saturation and lightness
    pub fn generate(draws: &SeededDraws) -> Self {
        // floor of a value in [0, span) always fits the target type.
        Self {
            hue: (draws.at(HUE_OFFSET) * 360.0).floor() as u16,
            saturation: 60 + (draws.at(SATURATION_OFFSET) * 40.0).floor() as u8,
            lightness: 40 + (draws.at(LIGHTNESS_OFFSET) * 20.0).floor() as u8,
        }
    }

    /// CSS color, e.g. `hsl(210, 75%, 48%)`
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Body proportions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physique {
    pub height: f64,
    /// Stroke width multiplier, 0.85..1.25
    pub build: f64,
    pub leg_to_body_ratio: f64,
}

impl Physique {
    /// Draw the build; height and leg ratio stay at 1.0
    pub fn generate(draws: &SeededDraws) -> Self {
        Self {
            height: 1.0,
            build: draws.in_range(BUILD_OFFSET, 0.85, 0.4),
            leg_to_body_ratio: 1.0,
        }
    }
}

impl Default for Physique {
    fn default() -> Self {
        Self {
            height: 1.0,
            build: 1.0,
            leg_to_body_ratio: 1.0,
        }
    }
}

/// Overall movement energy in `[0.3, 1.0)`
pub fn generate_energy(draws: &SeededDraws) -> f64 {
    draws.in_range(ENERGY_OFFSET, 0.3, 0.7)
}
