//! Generation-counted debounce.
//!
//! Each trigger bumps the generation and hands it back so the caller can arm a
//! timer tagged with it. When a tagged timer fires, only the one matching the
//! latest generation is current; earlier ones belong to a burst that has
//! since been extended and are dropped.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[derive(Debug, Clone, Copy, Default)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new event in the burst and return the generation to tag its timer with.
    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Whether a timer armed with `generation` is the last one of the burst.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}
