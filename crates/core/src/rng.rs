//! Deterministic RNG for spawning scenes.
//!
//! A small LCG so demo scenes and benchmarks are reproducible from a seed
//! without pulling in a full RNG stack.

use crate::types::Color;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would only ever yield the increment sequence from 0.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in `[0, max)`. `max == 0` yields 0.
    pub fn next_below(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Value in `[lo, hi)`. An empty range yields `lo`.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi as i64 - lo as i64) as u32;
        (lo as i64 + self.next_below(span) as i64) as i32
    }

    /// Any 24-bit color below white.
    pub fn color(&mut self) -> Color {
        Color::new(self.next_below(0xffffff))
    }
}
