//! Seed derivation - identifier → u32
//!
//! A rolling `hash * 31 + c` over UTF-16 code units with 32-bit wraparound,
//! matching the hash browsers compute with `charCodeAt`. Not cryptographic;
//! collisions are accepted.

/// Derive the avatar seed from an identifier.
///
/// The empty identifier yields `0`, which is a legal (if dull) seed.
pub fn derive_seed(identifier: &str) -> u32 {
    let hash = identifier.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });

    // i32::MIN has no positive i32 counterpart; unsigned_abs keeps it as 2^31.
    hash.unsigned_abs()
}
