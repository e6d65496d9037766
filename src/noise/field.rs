//! 1-D gradient noise sampled at fractional positions.
//!
//! This is a simplified cousin of Perlin noise: each lattice point
//! carries a 1-bit gradient direction (+1 or -1) drawn from a table of
//! uniform randoms, and neighboring ramp contributions are blended with
//! the smootherstep curve. The ramp-times-distance formula is kept
//! exactly as-is because the sound character of the output depends on
//! it; swapping in textbook Perlin interpolation changes the result.

use rand::Rng;

/// Fixed table of uniform random values in [0, 1).
///
/// Seeds the gradient direction of every lattice point. Generated once
/// per synthesis run and read-only afterwards; there is no persistence,
/// so absolute sample values differ between runs.
#[derive(Debug, Clone)]
pub struct NoiseTable {
    values: Vec<f64>,
}

impl NoiseTable {
    /// Generates a fresh table of `len` uniform random values.
    pub fn generate<R: Rng>(len: usize, rng: &mut R) -> Self {
        let values = (0..len).map(|_| rng.gen::<f64>()).collect();
        Self { values }
    }

    /// Returns the number of lattice points in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Gradient noise field over a [`NoiseTable`].
///
/// Within one synthesis run, [`value`](NoiseField::value) is a pure
/// function of position.
#[derive(Debug, Clone)]
pub struct NoiseField {
    table: NoiseTable,
}

impl NoiseField {
    /// Creates a field over the given table.
    ///
    /// The table must be non-empty; lattice indices wrap around its
    /// length.
    pub fn new(table: NoiseTable) -> Self {
        debug_assert!(!table.is_empty(), "noise table must have at least one entry");
        Self { table }
    }

    /// Gradient direction at the lattice point containing `lattice`.
    ///
    /// Maps the floored position onto the table (wrapping) and collapses
    /// the stored uniform value to +1 or -1.
    fn gradient(&self, lattice: f64) -> f64 {
        let len = self.table.len() as i64;
        let index = (lattice.floor() as i64).rem_euclid(len) as usize;
        if self.table.values[index] > 0.5 {
            1.0
        } else {
            -1.0
        }
    }

    /// Smootherstep ease curve `t^3 (t (6t - 15) + 10)`.
    ///
    /// C2-continuous on [0, 1] with `fade(0) = 0` and `fade(1) = 1`.
    pub fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    /// Noise value at fractional position `p`.
    ///
    /// Blends the ramp contributions of the two neighboring lattice
    /// points: `(1 - fade(t)) * g0 * (p - p0) + fade(t) * g1 * (p - p1)`
    /// where `t = p - floor(p)`. Output is bounded in [-1, 1].
    pub fn value(&self, p: f64) -> f64 {
        let p0 = p.floor();
        let p1 = p0 + 1.0;
        let t = p - p0;
        let fade_t = Self::fade(t);
        let g0 = self.gradient(p0);
        let g1 = self.gradient(p1);
        (1.0 - fade_t) * g0 * (p - p0) + fade_t * g1 * (p - p1)
    }
}
