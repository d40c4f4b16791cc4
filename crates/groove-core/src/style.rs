//! Dance styles - one roll picks a bucket, nine draws fill its preferences
//!
//! The buckets live in [`STYLE_TABLE`], ordered by their upper roll bound.
//! A roll exactly on a bound belongs to the next bucket.

use serde::{Deserialize, Serialize};

use crate::rng::SeededDraws;

pub(crate) const STYLE_ROLL_OFFSET: u32 = 6;
const PARAM_OFFSET_BASE: u32 = 20;
const PARAM_OFFSET_STRIDE: u32 = 10;

/// Number of movement preference parameters
pub const PARAM_COUNT: usize = 9;

/// Movement personality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DanceStyle {
    Energetic,
    Smooth,
    Percussive,
    Latin,
    Structured,
    /// Every parameter drawn over the full unit range
    Freestyle,
}

impl DanceStyle {
    /// Lowercase style name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Energetic => "energetic",
            Self::Smooth => "smooth",
            Self::Percussive => "percussive",
            Self::Latin => "latin",
            Self::Structured => "structured",
            Self::Freestyle => "freestyle",
        }
    }
}

impl std::fmt::Display for DanceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed interval a preference is mapped into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    /// Range from `min` to `max`
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn sample(&self, draws: &SeededDraws, offset: u32) -> f64 {
        draws.in_range(offset, self.min, self.max - self.min)
    }
}

/// One row of the style table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleBucket {
    /// Exclusive upper bound on the style roll
    pub upper: f64,
    pub style: DanceStyle,
    /// In [`MovePreferences::to_array`] order
    pub ranges: [ParamRange; PARAM_COUNT],
}

const fn r(min: f64, max: f64) -> ParamRange {
    ParamRange::new(min, max)
}

//                 arm           leg           rot           jump          sym           head          hip           shoulder      rhythm
pub static STYLE_TABLE: [StyleBucket; 6] = [
    StyleBucket { upper: 0.15, style: DanceStyle::Energetic,
        ranges: [r(0.8, 1.0), r(0.7, 1.0), r(0.6, 1.0), r(0.5, 1.0), r(0.0, 0.4), r(0.5, 1.0), r(0.0, 0.3), r(0.6, 1.0), r(0.6, 1.0)] },
    StyleBucket { upper: 0.30, style: DanceStyle::Smooth,
        ranges: [r(0.7, 1.0), r(0.4, 0.7), r(0.5, 0.8), r(0.1, 0.4), r(0.6, 1.0), r(0.3, 0.7), r(0.5, 1.0), r(0.2, 0.5), r(0.2, 0.5)] },
    StyleBucket { upper: 0.45, style: DanceStyle::Percussive,
        ranges: [r(0.4, 0.8), r(0.8, 1.0), r(0.3, 0.7), r(0.4, 0.9), r(0.7, 1.0), r(0.6, 1.0), r(0.3, 0.6), r(0.5, 1.0), r(0.7, 1.0)] },
    StyleBucket { upper: 0.60, style: DanceStyle::Latin,
        ranges: [r(0.6, 1.0), r(0.6, 1.0), r(0.7, 1.0), r(0.2, 0.5), r(0.0, 0.5), r(0.4, 0.7), r(0.8, 1.0), r(0.4, 0.8), r(0.5, 0.8)] },
    StyleBucket { upper: 0.75, style: DanceStyle::Structured,
        ranges: [r(0.7, 1.0), r(0.6, 1.0), r(0.4, 0.7), r(0.3, 0.7), r(0.8, 1.0), r(0.2, 0.5), r(0.2, 0.5), r(0.3, 0.6), r(0.3, 0.5)] },
    StyleBucket { upper: 1.0, style: DanceStyle::Freestyle,
        ranges: [r(0.0, 1.0); PARAM_COUNT] },
];

impl StyleBucket {
    /// Pick the bucket for a roll; returns its table index too.
    pub fn select(roll: f64) -> (usize, &'static StyleBucket) {
        STYLE_TABLE
            .iter()
            .enumerate()
            .find(|(_, bucket)| roll < bucket.upper)
            .unwrap_or((STYLE_TABLE.len() - 1, &STYLE_TABLE[STYLE_TABLE.len() - 1]))
    }

    /// Draw offset for parameter `param` of bucket `index`
    pub fn param_offset(index: usize, param: usize) -> u32 {
        PARAM_OFFSET_BASE + PARAM_OFFSET_STRIDE * index as u32 + param as u32
    }
}

/// Nine movement intensities, each within its bucket's range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovePreferences {
    pub arm_movement: f64,
    pub leg_movement: f64,
    pub body_rotation: f64,
    pub jumpiness: f64,
    pub symmetry: f64,
    pub head_movement: f64,
    pub hip_sway: f64,
    pub shoulder_bounce: f64,
    pub rhythm_variation: f64,
}

impl MovePreferences {
    /// Roll a style and fill its preferences.
    pub fn generate(draws: &SeededDraws) -> (DanceStyle, Self) {
        let roll = draws.at(STYLE_ROLL_OFFSET);
        let (index, bucket) = StyleBucket::select(roll);

        let mut values = [0.0; PARAM_COUNT];
        for (param, (value, range)) in values.iter_mut().zip(bucket.ranges.iter()).enumerate() {
            *value = range.sample(draws, StyleBucket::param_offset(index, param));
        }

        tracing::trace!(roll, style = %bucket.style, "style selected");
        (bucket.style, Self::from_array(values))
    }

    /// Build from values in [`Self::to_array`] order
    pub fn from_array(v: [f64; PARAM_COUNT]) -> Self {
        Self {
            arm_movement: v[0],
            leg_movement: v[1],
            body_rotation: v[2],
            jumpiness: v[3],
            symmetry: v[4],
            head_movement: v[5],
            hip_sway: v[6],
            shoulder_bounce: v[7],
            rhythm_variation: v[8],
        }
    }

    /// Values in table column order
    pub fn to_array(&self) -> [f64; PARAM_COUNT] {
        [
            self.arm_movement,
            self.leg_movement,
            self.body_rotation,
            self.jumpiness,
            self.symmetry,
            self.head_movement,
            self.hip_sway,
            self.shoulder_bounce,
            self.rhythm_variation,
        ]
    }

    /// True when every value sits inside the style's declared ranges
    pub fn within(&self, style: DanceStyle) -> bool {
        STYLE_TABLE
            .iter()
            .find(|bucket| bucket.style == style)
            .map(|bucket| {
                self.to_array()
                    .iter()
                    .zip(bucket.ranges.iter())
                    .all(|(value, range)| range.contains(*value))
            })
            .unwrap_or(false)
    }
}
