//! # Groove Visual Engine
//!
//! Renders a [`groove_core::Avatar`] as a self-contained animated SVG.
//!
//! ```text
//! <svg>
//!   <style>  @keyframes per segment + one class rule each  </style>
//!   shadow
//!   body ─┬─ torso, head
//!         ├─ shoulder-r ─ elbow-r     shoulder-l ─ elbow-l
//!         └─ hip-r ─ knee-r           hip-l ─ knee-l
//! </svg>
//! ```
//!
//! Every class and keyframe name is prefixed by a [`RenderScope`], so any
//! number of avatars can share one page.

pub mod config;
pub mod render;
pub mod scope;
pub mod skeleton;
pub mod timeline;

pub use config::RenderConfig;
pub use render::AvatarRenderer;
pub use scope::RenderScope;
pub use skeleton::{Segment, Skeleton};

/// Result type for visual operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from visual operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid render scope '{0}': must start with a letter and contain only [A-Za-z0-9_-]")]
    InvalidScope(String),

    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
