//! CSS timelines - one `@keyframes` block and class rule per segment

use groove_core::pose::LOOP_FRAMES;
use groove_core::Pose;

use crate::scope::RenderScope;
use crate::skeleton::{Segment, Skeleton};

/// Percentage position of keyframe `index` within the loop
pub fn keyframe_percent(index: usize) -> f64 {
    index as f64 * 100.0 / LOOP_FRAMES as f64
}

/// `@keyframes` block for one segment over the whole pose loop
pub fn keyframes(scope: &RenderScope, segment: Segment, poses: &[Pose]) -> String {
    let stops: String = poses
        .iter()
        .enumerate()
        .map(|(index, pose)| {
            format!(
                "  {:.2}% {{ transform: {}; }}\n",
                keyframe_percent(index),
                segment.transform(pose)
            )
        })
        .collect();
    format!("@keyframes {} {{\n{}}}\n", scope.name_for(segment), stops)
}

/// Class rule binding a segment's group to its timeline
pub fn class_rule(scope: &RenderScope, segment: Segment, skeleton: &Skeleton, cycle_seconds: f64) -> String {
    let name = scope.name_for(segment);
    let pivot = skeleton.pivot(segment);
    format!(
        ".{name} {{ animation: {name} {cycle:.3}s linear infinite; transform-box: view-box; transform-origin: {x:.2}px {y:.2}px; }}\n",
        name = name,
        cycle = cycle_seconds,
        x = pivot.x,
        y = pivot.y,
    )
}

/// Full stylesheet: every segment's keyframes followed by its class rule
pub fn stylesheet(scope: &RenderScope, poses: &[Pose], skeleton: &Skeleton, cycle_seconds: f64) -> String {
    Segment::ALL
        .iter()
        .map(|segment| {
            let mut block = keyframes(scope, *segment, poses);
            block.push_str(&class_rule(scope, *segment, skeleton, cycle_seconds));
            block
        })
        .collect()
}
