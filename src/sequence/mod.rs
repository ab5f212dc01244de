//! Integer sequence sources feeding the binary selector
//!
//! The sequence is the swappable stage of the pipeline: the index mapper and
//! the binary selector never change, while the numbers looked up between them
//! decide the character of the final pattern. A source is chosen once, before
//! generation begins, and produces a deterministic stream for a requested
//! length.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::math::is_prime;

/// Strategy choice for the integer sequence
///
/// Every variant is deterministic for a fixed configuration; `Random` derives
/// its stream from the stored seed so repeated runs reproduce the same
/// pattern.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// The natural numbers: `seq[i] = i`
    #[default]
    Identity,
    /// The Fibonacci numbers 1, 1, 2, 3, 5, …, wrapping on u64 overflow
    Fibonacci,
    /// The primes 2, 3, 5, 7, … by trial division
    Primes,
    /// A seeded uniform stream of 32-bit values
    Random {
        /// Seed for the random number generator
        seed: u64,
    },
}

impl SequenceKind {
    /// Produce the first `length` values of the sequence
    pub fn generate(self, length: usize) -> Vec<u64> {
        match self {
            Self::Identity => (0..length as u64).collect(),
            Self::Fibonacci => fibonacci(length),
            Self::Primes => primes(length),
            Self::Random { seed } => random(length, seed),
        }
    }
}

fn fibonacci(length: usize) -> Vec<u64> {
    let mut values = Vec::with_capacity(length);
    let mut previous = 0u64;
    let mut current = 1u64;
    for _ in 0..length {
        values.push(current);
        let next = previous.wrapping_add(current);
        previous = current;
        current = next;
    }
    values
}

fn primes(length: usize) -> Vec<u64> {
    let mut values = Vec::with_capacity(length);
    let mut candidate = 2u64;
    while values.len() < length {
        if is_prime(candidate) {
            values.push(candidate);
        }
        candidate += 1;
    }
    values
}

fn random(length: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..length).map(|_| u64::from(rng.random::<u32>())).collect()
}
