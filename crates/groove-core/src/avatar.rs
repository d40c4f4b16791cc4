//! Avatar - everything derived from one identifier
//!
//! All fields are computed once in [`Avatar::new`] and never change.

use serde::{Deserialize, Serialize};

use crate::attributes::{generate_energy, ColorSpec, Physique};
use crate::describe::describe_pose;
use crate::pose::{synthesize, Pose};
use crate::rng::SeededDraws;
use crate::seed::derive_seed;
use crate::style::{DanceStyle, MovePreferences};
use crate::Result;

/// A dancer generated from an identifier
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    identifier: String,
    seed: u32,
    color: ColorSpec,
    energy: f64,
    physique: Physique,
    style: DanceStyle,
    preferences: MovePreferences,
    poses: Vec<Pose>,
}

impl Avatar {
    /// Generate the avatar for an identifier. Any string works, including "".
    pub fn new(identifier: &str) -> Self {
        let seed = derive_seed(identifier);
        let draws = SeededDraws::new(f64::from(seed));

        let color = ColorSpec::generate(&draws);
        let energy = generate_energy(&draws);
        let physique = Physique::generate(&draws);
        let (style, preferences) = MovePreferences::generate(&draws);
        let poses = synthesize(seed, energy, &preferences);

        tracing::debug!(seed, %style, energy, "avatar generated");

        Self {
            identifier: identifier.to_string(),
            seed,
            color,
            energy,
            physique,
            style,
            preferences,
            poses,
        }
    }

    /// The identifier this avatar was generated from
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Seed derived from the identifier
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn color(&self) -> ColorSpec {
        self.color
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn physique(&self) -> Physique {
        self.physique
    }

    pub fn style(&self) -> DanceStyle {
        self.style
    }

    pub fn preferences(&self) -> &MovePreferences {
        &self.preferences
    }

    /// The 16 keyframes; the last equals the first
    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    /// One label per keyframe
    pub fn moves(&self) -> Vec<String> {
        self.poses.iter().map(describe_pose).collect()
    }

    /// Snapshot for inspection and tests
    pub fn summary(&self) -> AvatarSummary {
        AvatarSummary {
            identifier: self.identifier.clone(),
            seed: self.seed,
            style: self.style,
            color: self.color,
            energy: self.energy,
            preferences: self.preferences,
            physique: self.physique,
            poses: self.poses.clone(),
            moves: self.moves(),
        }
    }
}

/// Serializable view of an [`Avatar`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarSummary {
    pub identifier: String,
    pub seed: u32,
    pub style: DanceStyle,
    pub color: ColorSpec,
    pub energy: f64,
    pub preferences: MovePreferences,
    pub physique: Physique,
    pub poses: Vec<Pose>,
    pub moves: Vec<String>,
}

impl AvatarSummary {
    /// Serialize to JSON, optionally pretty-printed
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
