//! Injectable random source for synthetic scores, cached flags and delays

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of uniform values in `[0, 1)`
///
/// Every synthetic field goes through this trait so tests can pin the
/// sequence.
pub trait RandomSource: Send + Sync {
    /// Next uniform value in `[0, 1)`
    fn next_f64(&self) -> f64;

    /// Uniform value in `[lo, hi)`
    fn range_f64(&self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// True with probability `p`
    fn chance(&self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform index in `0..len`; `len` must be non-zero
    fn index(&self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Uniform integer in `lo..=hi`
    fn between_u64(&self, lo: u64, hi: u64) -> u64 {
        if hi <= lo {
            return lo;
        }
        lo + self.index((hi - lo + 1) as usize) as u64
    }
}

/// `StdRng`-backed source, seeded or from OS entropy
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: Mutex<usize>,
}

impl SequenceRandom {
    /// Values are clamped into `[0, 1)`; an empty list always yields 0
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self {
            values,
            cursor: Mutex::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mut cursor = self.cursor.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let value = self.values[*cursor % self.values.len()];
        *cursor += 1;
        value
    }
}
