// src/random.rs
//! Sources of uniform random numbers for the pattern generator.
//!
//! The generator never touches a global RNG; whoever drives it hands in a
//! [`RandomSource`]. Production code uses [`RngSource`] seeded from OS
//! entropy, tests replay fixed draws through [`SequenceSource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// A uniform draw in `[low, high)`. Returns `low` when the range is empty.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }
}

/// Adapts any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        RngSource::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }
}

/// Replays a fixed list of unit values in `[0, 1)`, cycling when exhausted.
/// Each value `u` becomes `low + u * (high - low)`.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    units: Vec<f64>,
    next: usize,
    drawn: usize,
}

impl SequenceSource {
    pub fn new(units: Vec<f64>) -> Self {
        assert!(!units.is_empty(), "SequenceSource needs at least one value");
        SequenceSource {
            units,
            next: 0,
            drawn: 0,
        }
    }

    /// Always yields `unit`.
    pub fn constant(unit: f64) -> Self {
        SequenceSource::new(vec![unit])
    }

    /// Number of draws taken so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl RandomSource for SequenceSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let u = self.units[self.next];
        self.next = (self.next + 1) % self.units.len();
        self.drawn += 1;
        if high <= low {
            return low;
        }
        let v = low + u.clamp(0.0, 1.0) * (high - low);
        if v >= high {
            just_below(high).max(low)
        } else {
            v
        }
    }
}

/// The largest float strictly less than `x`.
fn just_below(x: f64) -> f64 {
    if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f64::from_bits(1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}
