//! Pluggable randomness for reply selection.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random decisions a reply depends on.
pub trait RandomSource: Send {
    /// Uniform index in `0..len`. Callers never pass `0`.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn roll(&mut self) -> f64;
}

/// Pick one item uniformly, or `None` for an empty slice.
pub fn choose<'a, T>(random: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(random.index(items.len()))
}

/// [`StdRng`]-backed source; seed it for reproducible conversations.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl RandomSource for SeededRandom {
    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len.max(1))
    }

    fn roll(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Replays fixed decisions, for tests and demos.
///
/// Exhausted queues fall back to index `0` and roll `0.0`. Indices are
/// reduced modulo the requested length.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    indices: VecDeque<usize>,
    rolls: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = f64>) -> Self {
        self.rolls.extend(rolls);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len.max(1)
    }

    fn roll(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(0.0)
    }
}
