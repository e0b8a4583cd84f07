//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic for a given seed, so tests can pin exact particle parameters.

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in [lo, hi). Returns `lo` when the range is empty.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        let v = lo + self.next_f32() * (hi - lo);
        // Rounding can land exactly on `hi` for narrow ranges.
        if v >= hi { lo } else { v }
    }

    /// Same as [`Rng::range`] for a `(lo, hi)` pair.
    pub fn in_range(&mut self, bounds: (f32, f32)) -> f32 {
        self.range(bounds.0, bounds.1)
    }
}
