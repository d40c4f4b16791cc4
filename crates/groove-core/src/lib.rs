//! # Groove Core
//!
//! Deterministic dance avatars: one identifier in, one dancer out.
//!
//! ```text
//! identifier ──► seed ──► draws ──┬──► color / energy / physique
//!                                 ├──► style bucket ──► move preferences
//!                                 └──► pose synthesizer ──► 16 keyframes
//!                                                           (last == first)
//! ```
//!
//! Nothing here is random in the `rand` sense. Every value is a pure function
//! of the identifier, so two machines rendering the same identifier agree on
//! every keyframe.

pub mod attributes;
pub mod avatar;
pub mod describe;
pub mod pose;
pub mod rng;
pub mod seed;
pub mod style;

pub use attributes::{ColorSpec, Physique};
pub use avatar::{Avatar, AvatarSummary};
pub use describe::describe_pose;
pub use pose::{Pose, FRAME_COUNT};
pub use rng::{draw, SeededDraws};
pub use seed::derive_seed;
pub use style::{DanceStyle, MovePreferences, ParamRange, StyleBucket, STYLE_TABLE};

/// Result type for groove-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in groove-core
///
/// Avatar generation itself cannot fail; only the export paths can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
