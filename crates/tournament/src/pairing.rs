//! Seeded pairing of a population into disjoint matches

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Pairing of a population for one round, as indices into that population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// Disjoint pairs in shuffled order
    pub pairs: Vec<(usize, usize)>,
    /// Left-over index when the population is odd
    pub bye: Option<usize>,
}

impl Pairing {
    /// Shuffle `0..len` with a generator seeded by `seed + round_index`, then
    /// walk the shuffle two at a time.
    ///
    /// Identical inputs always give the identical pairing. With an odd `len`
    /// the last shuffled index sits out the round.
    pub fn new(len: usize, seed: u64, round_index: u32) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(u64::from(round_index)));
        order.shuffle(&mut rng);

        let pairs = order
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        let bye = if len % 2 == 1 { order.last().copied() } else { None };

        Self { pairs, bye }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
