//! # Randomness Abstraction
//!
//! This module decouples the generation pipeline from any concrete random
//! number generator so the same code runs against `rand::rng()` in the game
//! and against a scripted, fully deterministic source in tests.
//!
//! ## Key Pieces
//! - [`RandomSource`] - the two primitives the core needs: a unit-interval
//!   float and a bounded index. Blanket-implemented for every [`rand::Rng`].
//! - [`ScriptedSource`] - replays fixed value queues; exhausted queues fall
//!   back to zero, which makes "always pick the first/heaviest option"
//!   scenarios trivial to pin down.
//! - [`choice_weighted`] - cumulative-threshold weighted selection over
//!   `(item, weight)` pairs.

use rand::Rng;
use std::collections::VecDeque;

/// Source of the two random primitives the generation pipeline uses.
///
/// Implemented for every [`rand::Rng`], so `rand::rng()` works directly.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn index(&mut self, n: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn index(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

/// Deterministic [`RandomSource`] that replays scripted values.
///
/// Unit values and index values are consumed from separate queues in call
/// order. An exhausted queue yields `0.0` / `0`, so an empty script always
/// selects the first listed option of every choice. Scripted index values
/// are reduced modulo the requested bound.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    units: VecDeque<f64>,
    indexes: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(units: Vec<f64>, indexes: Vec<usize>) -> Self {
        Self {
            units: units.into(),
            indexes: indexes.into(),
        }
    }

    /// Script that always yields `0.0` / `0`.
    pub fn zeroes() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn index(&mut self, n: usize) -> usize {
        self.indexes.pop_front().unwrap_or(0) % n
    }
}

/// Select one item with probability proportional to its weight.
///
/// Walks the cumulative weight and returns the first item whose cumulative
/// share exceeds a single uniform roll. `weighted` must be non-empty; the
/// last item is returned if floating-point rounding leaves the roll past
/// the final threshold.
pub fn choice_weighted<'a, T, R>(rng: &mut R, weighted: &'a [(T, u32)]) -> &'a T
where
    R: RandomSource + ?Sized,
{
    let total: u32 = weighted.iter().map(|(_, w)| w).sum();
    let roll = rng.unit() * f64::from(total);

    let mut cumulative = 0.0;
    for (item, weight) in weighted {
        cumulative += f64::from(*weight);
        if roll < cumulative {
            return item;
        }
    }
    &weighted[weighted.len() - 1].0
}
