//! Render configuration
//!
//! Defaults, optionally a JSON file, then `GROOVE_*` environment overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default rendered width and height in pixels
pub const DEFAULT_SIZE: u32 = 200;
/// Default tempo
pub const DEFAULT_BPM: f64 = 120.0;
/// Default beats per dance loop
pub const DEFAULT_BEATS: u32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width and height in pixels
    pub size: u32,
    /// Tempo the loop is timed against
    pub bpm: f64,
    /// Beats in one loop
    pub beats: u32,
    /// Optional background fill; transparent when unset
    pub background: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            bpm: DEFAULT_BPM,
            beats: DEFAULT_BEATS,
            background: None,
        }
    }
}

impl RenderConfig {
    /// Load from a JSON file; missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GROOVE_SIZE`, `GROOVE_BPM`, `GROOVE_BEATS` and `GROOVE_BACKGROUND`.
    ///
    /// Unparseable numbers are ignored, keeping the current value.
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(size) = lookup("GROOVE_SIZE").and_then(|s| s.parse().ok()) {
            self.size = size;
        }
        if let Some(bpm) = lookup("GROOVE_BPM").and_then(|s| s.parse().ok()) {
            self.bpm = bpm;
        }
        if let Some(beats) = lookup("GROOVE_BEATS").and_then(|s| s.parse().ok()) {
            self.beats = beats;
        }
        if let Some(background) = lookup("GROOVE_BACKGROUND") {
            self.background = if background.is_empty() { None } else { Some(background) };
        }
        self
    }

    /// Check size, tempo, beats and background
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfig("size must be at least 1 pixel".into()));
        }
        if !(self.bpm.is_finite() && self.bpm > 0.0) {
            return Err(Error::InvalidConfig(format!("bpm must be positive, got {}", self.bpm)));
        }
        if self.beats == 0 {
            return Err(Error::InvalidConfig("beats must be at least 1".into()));
        }
        if let Some(background) = &self.background {
            let safe = background
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "#(),.% ".contains(c));
            if !safe {
                return Err(Error::InvalidConfig(format!("unsupported background color '{}'", background)));
            }
        }
        Ok(())
    }

    /// Loop duration: `beats` at `bpm`, 4 s by default
    pub fn cycle_seconds(&self) -> f64 {
        f64::from(self.beats) * 60.0 / self.bpm
    }
}
