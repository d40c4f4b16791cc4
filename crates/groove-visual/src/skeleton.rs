//! Skeleton geometry in a 200×200 view box
//!
//! Segment lengths scale with `height` (legs also with `leg_to_body_ratio`),
//! stroke widths with `build`. Limbs are drawn hanging straight down; the
//! animation rotates them about their pivots.

use groove_core::{Physique, Pose};

/// Side of the square view box
pub const VIEW_BOX: f64 = 200.0;

const CENTER_X: f64 = 100.0;
const HIP_Y: f64 = 112.0;
const GROUND_Y: f64 = 182.0;

const TORSO: f64 = 40.0;
const NECK: f64 = 5.0;
const HEAD_RADIUS: f64 = 12.0;
const SHOULDER_HALF_WIDTH: f64 = 14.0;
const SHOULDER_DROP: f64 = 3.0;
const HIP_HALF_WIDTH: f64 = 8.0;
const UPPER_ARM: f64 = 26.0;
const FOREARM: f64 = 24.0;
const THIGH: f64 = 30.0;
const SHIN: f64 = 30.0;

const TORSO_STROKE: f64 = 10.0;
const LIMB_STROKE: f64 = 6.0;
const LOWER_LIMB_STROKE: f64 = 5.0;

/// Animatable parts of the figure, one timeline each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Body,
    Head,
    ShoulderRight,
    ShoulderLeft,
    ElbowRight,
    ElbowLeft,
    HipRight,
    HipLeft,
    KneeRight,
    KneeLeft,
    Shadow,
}

impl Segment {
    pub const ALL: [Segment; 11] = [
        Segment::Body,
        Segment::Head,
        Segment::ShoulderRight,
        Segment::ShoulderLeft,
        Segment::ElbowRight,
        Segment::ElbowLeft,
        Segment::HipRight,
        Segment::HipLeft,
        Segment::KneeRight,
        Segment::KneeLeft,
        Segment::Shadow,
    ];

    /// Suffix used in class and keyframe names
    pub fn name(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Head => "head",
            Self::ShoulderRight => "shoulder-r",
            Self::ShoulderLeft => "shoulder-l",
            Self::ElbowRight => "elbow-r",
            Self::ElbowLeft => "elbow-l",
            Self::HipRight => "hip-r",
            Self::HipLeft => "hip-l",
            Self::KneeRight => "knee-r",
            Self::KneeLeft => "knee-l",
            Self::Shadow => "shadow",
        }
    }

    /// CSS transform for this segment at one keyframe.
    ///
    /// SVG rotation is clockwise, so angles are negated: a larger right
    /// shoulder angle swings the right arm out and up, a more negative left
    /// shoulder angle does the same on the left. Elbows and knees are
    /// magnitudes and get their side's bend direction here.
    pub fn transform(&self, pose: &Pose) -> String {
        match self {
            Self::Body => format!(
                "translate(0px, {:.2}px) rotate({:.2}deg) scaleX({:.3})",
                -pose.vertical,
                pose.body_tilt,
                pose.body_rotate.to_radians().cos()
            ),
            Self::Head => format!("rotate({:.2}deg)", pose.head_tilt),
            Self::ShoulderRight => format!("rotate({:.2}deg)", -pose.right_shoulder),
            Self::ShoulderLeft => format!("rotate({:.2}deg)", -pose.left_shoulder),
            Self::ElbowRight => format!("rotate({:.2}deg)", -pose.right_elbow),
            Self::ElbowLeft => format!("rotate({:.2}deg)", pose.left_elbow),
            Self::HipRight => format!(
                "translate({:.2}px, 0px) rotate({:.2}deg)",
                pose.right_hip_offset, -pose.right_hip
            ),
            Self::HipLeft => format!(
                "translate({:.2}px, 0px) rotate({:.2}deg)",
                pose.left_hip_offset, -pose.left_hip
            ),
            Self::KneeRight => format!("rotate({:.2}deg)", pose.right_knee),
            Self::KneeLeft => format!("rotate({:.2}deg)", -pose.left_knee),
            // The shadow shrinks while the body is in the air.
            Self::Shadow => format!(
                "scale({:.3}, 1)",
                (1.0 - pose.vertical * 0.02).clamp(0.6, 1.2)
            ),
        }
    }
}

/// A point in view box units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn below(&self, dy: f64) -> Self {
        Self::new(self.x, self.y + dy)
    }
}

/// Joint positions and stroke widths for one physique
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    pub hip_center: Point,
    pub neck: Point,
    pub head_center: Point,
    pub head_radius: f64,
    pub right_shoulder: Point,
    pub left_shoulder: Point,
    pub right_elbow: Point,
    pub left_elbow: Point,
    pub right_hand: Point,
    pub left_hand: Point,
    pub right_hip: Point,
    pub left_hip: Point,
    pub right_knee: Point,
    pub left_knee: Point,
    pub right_foot: Point,
    pub left_foot: Point,
    pub ground: Point,
    pub torso_stroke: f64,
    pub limb_stroke: f64,
    pub lower_limb_stroke: f64,
}

impl Skeleton {
    /// Lay out joints for a physique
    pub fn new(physique: &Physique) -> Self {
        let h = physique.height;
        let legs = h * physique.leg_to_body_ratio;
        let build = physique.build;

        let hip_center = Point::new(CENTER_X, HIP_Y);
        let neck = hip_center.below(-TORSO * h);
        let head_center = neck.below(-(NECK + HEAD_RADIUS) * h);
        let right_shoulder = Point::new(CENTER_X + SHOULDER_HALF_WIDTH * build, neck.y + SHOULDER_DROP * h);
        let left_shoulder = Point::new(CENTER_X - SHOULDER_HALF_WIDTH * build, neck.y + SHOULDER_DROP * h);
        let right_elbow = right_shoulder.below(UPPER_ARM * h);
        let left_elbow = left_shoulder.below(UPPER_ARM * h);
        let right_hip = Point::new(CENTER_X + HIP_HALF_WIDTH * build, HIP_Y);
        let left_hip = Point::new(CENTER_X - HIP_HALF_WIDTH * build, HIP_Y);
        let right_knee = right_hip.below(THIGH * legs);
        let left_knee = left_hip.below(THIGH * legs);

        Self {
            hip_center,
            neck,
            head_center,
            head_radius: HEAD_RADIUS * h,
            right_shoulder,
            left_shoulder,
            right_elbow,
            left_elbow,
            right_hand: right_elbow.below(FOREARM * h),
            left_hand: left_elbow.below(FOREARM * h),
            right_hip,
            left_hip,
            right_knee,
            left_knee,
            right_foot: right_knee.below(SHIN * legs),
            left_foot: left_knee.below(SHIN * legs),
            ground: Point::new(CENTER_X, GROUND_Y),
            torso_stroke: TORSO_STROKE * build,
            limb_stroke: LIMB_STROKE * build,
            lower_limb_stroke: LOWER_LIMB_STROKE * build,
        }
    }

    /// Rotation pivot for a segment
    pub fn pivot(&self, segment: Segment) -> Point {
        match segment {
            Segment::Body => self.hip_center,
            Segment::Head => self.neck,
            Segment::ShoulderRight => self.right_shoulder,
            Segment::ShoulderLeft => self.left_shoulder,
            Segment::ElbowRight => self.right_elbow,
            Segment::ElbowLeft => self.left_elbow,
            Segment::HipRight => self.right_hip,
            Segment::HipLeft => self.left_hip,
            Segment::KneeRight => self.right_knee,
            Segment::KneeLeft => self.left_knee,
            Segment::Shadow => self.ground,
        }
    }
}
