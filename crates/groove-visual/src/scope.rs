//! Render scopes - collision-free name prefixes
//!
//! Identifiers can contain anything, so they never appear in markup names
//! directly. The default scope is a short SHA-256 digest behind a letter.

use sha2::{Digest, Sha256};

use crate::skeleton::Segment;
use crate::{Error, Result};

const SCOPE_PREFIX: &str = "gv";
const DIGEST_BYTES: usize = 6;

/// Prefix for every class and keyframe name of one rendered avatar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderScope(String);

impl RenderScope {
    /// Use an explicit name. It must already be a valid CSS identifier.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_css_ident(&name) {
            return Err(Error::InvalidScope(name));
        }
        Ok(Self(name))
    }

    /// Derive the scope from an avatar identifier
    pub fn for_identifier(identifier: &str) -> Self {
        let digest = Sha256::digest(identifier.as_bytes());
        Self(format!("{}{}", SCOPE_PREFIX, hex::encode(&digest[..DIGEST_BYTES])))
    }

    /// Scope name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Class and keyframe name for one segment
    pub fn name_for(&self, segment: Segment) -> String {
        format!("{}-{}", self.0, segment.name())
    }
}

impl std::fmt::Display for RenderScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_css_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
