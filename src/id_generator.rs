//! # Identifier Generation
//!
//! Importers never mint identifiers on their own; they ask an [`IdGenerator`] passed in
//! by the caller. Tests and reproducible exports use [`SequentialIds`], interactive
//! callers that merge several imports into one planner use [`RandomIds`].

use rand::Rng;

/// Source of unique identifiers for imported recipes and ingredients
pub trait IdGenerator {
    /// Return a new identifier starting with `prefix`
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Monotonic counter producing `"{prefix}-1"`, `"{prefix}-2"`, ...
///
/// The counter is shared across prefixes, so identifiers stay unique even when two
/// prefixes are equal.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    counter: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting after `counter`
    pub fn starting_at(counter: u64) -> Self {
        Self { counter }
    }

    /// Number of identifiers issued so far
    pub fn issued(&self) -> u64 {
        self.counter
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{}-{}", prefix, self.counter)
    }
}

/// Random 64-bit hexadecimal suffixes, `"{prefix}-3f9a0c..."`
pub struct RandomIds<R: Rng> {
    rng: R,
}

impl RandomIds<rand::rngs::ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomIds<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomIds<R> {
    /// Use a caller-provided generator, e.g. a seeded one
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IdGenerator for RandomIds<R> {
    fn next_id(&mut self, prefix: &str) -> String {
        let suffix: u64 = self.rng.gen();
        format!("{}-{:016x}", prefix, suffix)
    }
}
