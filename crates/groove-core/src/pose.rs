//! Pose Synthesizer - 16 keyframes per dance loop
//!
//! Frames 0..15 are synthesized at `t = i / 15`; frame 15 is frame 0 again so
//! the loop closes. Each frame mixes its own seeded draws with sinusoids of
//! `t`, gated by the style preferences.
//!
//! ```text
//! t:    0 ─────────────── 0.5 ─────────────── 1
//! cos:  + right leg supports │ left leg supports │ + right
//! ```
//!
//! Angles are degrees. Elbows and knees are flexion magnitudes; which way a
//! joint bends is the renderer's business.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::rng::{draw, SeededDraws};
use crate::style::MovePreferences;

/// Keyframes per loop, including the closing copy of frame 0
pub const FRAME_COUNT: usize = 16;

/// Distinct keyframes per loop
pub const LOOP_FRAMES: usize = FRAME_COUNT - 1;

const FRAME_SEED_STRIDE: f64 = 1000.0;

const HEAD_SEED_MULTIPLIER: f64 = 7.0;
const HEAD_SEED_BASIS: f64 = 12_345.0;
const HEAD_FRAME_STRIDE: f64 = 100.0;

/// Above this, the swinging leg snaps to the mirror of the supporting leg
pub const LEG_MIRROR_THRESHOLD: f64 = 0.6;
/// Above this, the left arm snaps to the mirror of the right arm
pub const ARM_MIRROR_THRESHOLD: f64 = 0.7;

// Per-frame draw offsets
const SUPPORT_HIP: u32 = 11;
const SUPPORT_OFFSET: u32 = 12;
const SWING_HIP: u32 = 13;
const SWING_OFFSET: u32 = 14;
const SUPPORT_KNEE: u32 = 15;
const SWING_KNEE: u32 = 16;
const RIGHT_SHOULDER: u32 = 21;
const LEFT_SHOULDER: u32 = 22;
const RIGHT_ELBOW: u32 = 23;
const LEFT_ELBOW: u32 = 24;
const BOUNCE_PHASE: u32 = 31;

/// One keyframe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub body_tilt: f64,
    pub body_rotate: f64,
    /// Bounce, positive is up
    pub vertical: f64,
    pub head_tilt: f64,
    pub right_shoulder: f64,
    pub right_elbow: f64,
    pub left_shoulder: f64,
    pub left_elbow: f64,
    pub right_hip: f64,
    pub right_knee: f64,
    pub right_hip_offset: f64,
    pub left_hip: f64,
    pub left_knee: f64,
    pub left_hip_offset: f64,
    pub right_leg_supporting: bool,
}

#[derive(Debug, Clone, Copy)]
struct Leg {
    hip: f64,
    knee: f64,
    offset: f64,
}

/// Knee flexion for a swinging leg: forward swings bend hard, back swings less.
fn swing_knee(hip: f64, roll: f64) -> f64 {
    if hip > 0.0 {
        50.0 + roll * 60.0
    } else {
        15.0 + roll * 45.0
    }
}

/// Build the full keyframe loop for one avatar.
pub fn synthesize(seed: u32, energy: f64, prefs: &MovePreferences) -> Vec<Pose> {
    let mut poses: Vec<Pose> = (0..LOOP_FRAMES)
        .map(|index| synthesize_frame(seed, index, energy, prefs))
        .collect();
    poses.push(poses[0]);

    apply_head_tilt(&mut poses, seed, energy, prefs);
    poses
}

fn synthesize_frame(seed: u32, index: usize, energy: f64, prefs: &MovePreferences) -> Pose {
    let t = index as f64 / LOOP_FRAMES as f64;
    let d = SeededDraws::new(f64::from(seed) + index as f64 * FRAME_SEED_STRIDE);

    let right_leg_supporting = (TAU * t).cos() > 0.0;

    // Legs
    let reach = 30.0 * prefs.leg_movement * energy;
    let support = Leg {
        hip: (d.at(SUPPORT_HIP) - 0.5) * reach * 0.7,
        knee: d.at(SUPPORT_KNEE) * 20.0 * 0.5,
        offset: (d.at(SUPPORT_OFFSET) - 0.5) * 4.0 * 0.5,
    };
    let (swing_hip, swing_offset) = if prefs.symmetry > LEG_MIRROR_THRESHOLD {
        (-support.hip, -support.offset)
    } else {
        (
            (d.at(SWING_HIP) - 0.5) * 2.0 * reach,
            (d.at(SWING_OFFSET) - 0.5) * 10.0 * prefs.leg_movement,
        )
    };
    let swing = Leg {
        hip: swing_hip,
        knee: swing_knee(swing_hip, d.at(SWING_KNEE)),
        offset: swing_offset,
    };
    let (right, left) = if right_leg_supporting {
        (support, swing)
    } else {
        (swing, support)
    };

    // Arms counter the opposite leg
    let arm_reach = 60.0 * prefs.arm_movement * energy;
    let phase = (d.at(BOUNCE_PHASE) - 0.5) * 0.2 * prefs.rhythm_variation;
    let bounce = (4.0 * TAU * t + phase).sin() * 10.0 * prefs.shoulder_bounce * energy;

    let right_shoulder = 45.0 + 0.5 * left.hip + bounce + (d.at(RIGHT_SHOULDER) - 0.5) * arm_reach;
    let right_elbow = 20.0 + 0.3 * left.hip.abs() + 0.5 * bounce + d.at(RIGHT_ELBOW) * arm_reach * 0.75;
    let (left_shoulder, left_elbow) = if prefs.symmetry > ARM_MIRROR_THRESHOLD {
        (-right_shoulder, right_elbow)
    } else {
        (
            -45.0 - 0.5 * right.hip - bounce + (d.at(LEFT_SHOULDER) - 0.5) * arm_reach,
            20.0 + 0.3 * right.hip.abs() + 0.5 * bounce + d.at(LEFT_ELBOW) * arm_reach * 0.75,
        )
    };

    let pose = Pose {
        body_tilt: (2.0 * TAU * t).sin() * 8.0 * energy * prefs.hip_sway,
        body_rotate: (TAU * t).sin() * 15.0 * energy * prefs.body_rotation,
        vertical: (4.0 * TAU * t).sin() * 10.0 * energy * prefs.jumpiness,
        head_tilt: 0.0,
        right_shoulder,
        right_elbow,
        left_shoulder,
        left_elbow,
        right_hip: right.hip,
        right_knee: right.knee,
        right_hip_offset: right.offset,
        left_hip: left.hip,
        left_knee: left.knee,
        left_hip_offset: left.offset,
        right_leg_supporting,
    };
    tracing::trace!(index, ?pose, "keyframe");
    pose
}

/// Second pass: head tilt from its own seed basis, then close the loop.
fn apply_head_tilt(poses: &mut [Pose], seed: u32, energy: f64, prefs: &MovePreferences) {
    let basis = f64::from(seed) * HEAD_SEED_MULTIPLIER + HEAD_SEED_BASIS;

    for (index, pose) in poses.iter_mut().enumerate() {
        let t = index as f64 / LOOP_FRAMES as f64;
        let wobble = (draw(basis + index as f64 * HEAD_FRAME_STRIDE) - 0.5) * 6.0 * prefs.head_movement;
        pose.head_tilt = (2.0 * TAU * t).sin() * 8.0 * prefs.head_movement * energy + wobble;
    }

    if let [first, .., last] = poses {
        last.head_tilt = first.head_tilt;
    }
}
