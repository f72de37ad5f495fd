use rand::{Rng, SeedableRng};

use crate::application::ReplySelector;

/// Uniform pick using the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomReplySelector;

impl RandomReplySelector {
    pub fn new() -> Self {
        Self
    }
}

impl ReplySelector for RandomReplySelector {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform pick from a seeded `StdRng`; the same seed yields the same sequence.
pub struct SeededReplySelector {
    rng: rand::rngs::StdRng,
}

impl SeededReplySelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl ReplySelector for SeededReplySelector {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always the same index (wrapped to the candidate count).
#[derive(Debug, Clone, Copy)]
pub struct FixedReplySelector {
    index: usize,
}

impl FixedReplySelector {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl ReplySelector for FixedReplySelector {
    fn pick(&mut self, len: usize) -> usize {
        self.index % len
    }
}
