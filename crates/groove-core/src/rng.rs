//! Deterministic draws - `frac(sin(key) * 10000)`
//!
//! This is not a PRNG in any statistical sense. It is kept bit-exact so an
//! avatar rendered here matches one rendered by any other implementation of
//! the same transform.

/// Scale applied to `sin(key)` before taking the fractional part
pub const SINE_SCALE: f64 = 10_000.0;

/// One draw in `[0, 1)` for the given key.
///
/// Total over every finite key. A result that rounds up to exactly `1.0`
/// (tiny negative products) folds to `0.0`.
pub fn draw(key: f64) -> f64 {
    let x = key.sin() * SINE_SCALE;
    let frac = x - x.floor();
    if frac >= 1.0 || !frac.is_finite() {
        0.0
    } else {
        frac
    }
}

/// A seed bound to the draw function; draws are addressed by offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeededDraws {
    seed: f64,
}

impl SeededDraws {
    /// Bind draws to a seed
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    /// The bound seed
    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Draw at key `seed * offset`
    pub fn at(&self, offset: u32) -> f64 {
        draw(self.seed * f64::from(offset))
    }

    /// `base + span * draw`, i.e. a value in `[base, base + span)`
    pub fn in_range(&self, offset: u32, base: f64, span: f64) -> f64 {
        base + span * self.at(offset)
    }
}
