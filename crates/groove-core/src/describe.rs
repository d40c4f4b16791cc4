//! Pose description - keyframe → short move label
//!
//! Pure thresholds over a single pose. Used for the summary's move list and
//! for eyeballing a dance in logs.

use crate::pose::Pose;

const SHOULDER_REST: f64 = 45.0;
const ARM_THRESHOLD: f64 = 50.0;
const LEG_THRESHOLD: f64 = 20.0;
const BOUNCE_THRESHOLD: f64 = 8.0;
const TURN_THRESHOLD: f64 = 12.0;
const TILT_THRESHOLD: f64 = 8.0;

/// Label a pose, e.g. `"right arm up, left leg forward, jump"`.
///
/// Returns `"base stance"` when nothing crosses a threshold.
pub fn describe_pose(pose: &Pose) -> String {
    let mut moves: Vec<&str> = Vec::new();

    // Right shoulder rests at +45, left at -45; raising moves away from the body.
    let right = pose.right_shoulder - SHOULDER_REST;
    if right > ARM_THRESHOLD {
        moves.push("right arm up");
    } else if right < -ARM_THRESHOLD {
        moves.push("right arm down");
    }
    let left = pose.left_shoulder + SHOULDER_REST;
    if left < -ARM_THRESHOLD {
        moves.push("left arm up");
    } else if left > ARM_THRESHOLD {
        moves.push("left arm down");
    }

    if let Some(m) = leg_move(pose.right_hip, "right leg forward", "right leg back") {
        moves.push(m);
    }
    if let Some(m) = leg_move(pose.left_hip, "left leg forward", "left leg back") {
        moves.push(m);
    }

    if pose.vertical > BOUNCE_THRESHOLD {
        moves.push("jump");
    } else if pose.vertical < -BOUNCE_THRESHOLD {
        moves.push("squat");
    }
    if pose.body_rotate.abs() > TURN_THRESHOLD {
        moves.push("turn");
    }
    if pose.body_tilt.abs() > TILT_THRESHOLD {
        moves.push("balance");
    }

    if moves.is_empty() {
        "base stance".into()
    } else {
        moves.join(", ")
    }
}

fn leg_move(hip: f64, forward: &'static str, back: &'static str) -> Option<&'static str> {
    match hip {
        h if h > LEG_THRESHOLD => Some(forward),
        h if h < -LEG_THRESHOLD => Some(back),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest() -> Pose {
        Pose {
            body_tilt: 0.0,
            body_rotate: 0.0,
            vertical: 0.0,
            head_tilt: 0.0,
            right_shoulder: 45.0,
            right_elbow: 20.0,
            left_shoulder: -45.0,
            left_elbow: 20.0,
            right_hip: 0.0,
            right_knee: 5.0,
            right_hip_offset: 0.0,
            left_hip: 0.0,
            left_knee: 5.0,
            left_hip_offset: 0.0,
            right_leg_supporting: true,
        }
    }

    #[test]
    fn test_base_stance() {
        assert_eq!(describe_pose(&rest()), "base stance");
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut pose = rest();
        pose.right_shoulder = 95.0;
        pose.right_hip = 20.0;
        pose.vertical = 8.0;
        pose.body_rotate = -12.0;
        pose.body_tilt = 8.0;
        assert_eq!(describe_pose(&pose), "base stance");
    }

    #[test]
    fn test_arms() {
        let mut pose = rest();
        pose.right_shoulder = 100.0;
        pose.left_shoulder = -100.0;
        assert_eq!(describe_pose(&pose), "right arm up, left arm up");

        pose.right_shoulder = -10.0;
        pose.left_shoulder = 10.0;
        assert_eq!(describe_pose(&pose), "right arm down, left arm down");
    }

    #[test]
    fn test_legs_and_body() {
        let mut pose = rest();
        pose.right_hip = 25.0;
        pose.left_hip = -25.0;
        pose.vertical = -9.0;
        pose.body_rotate = 13.0;
        pose.body_tilt = -9.0;
        assert_eq!(
            describe_pose(&pose),
            "right leg forward, left leg back, squat, turn, balance"
        );
    }

    #[test]
    fn test_jump() {
        let mut pose = rest();
        pose.vertical = 9.5;
        assert_eq!(describe_pose(&pose), "jump");
    }
}
