//! Reference-counted page scroll lock.
//!
//! Overlays (the intro and the lightbox) each hold the lock under their own
//! [`LockHolder`] identity. Scrolling is suppressed while any holder remains
//! and restored only when the last one releases, so one overlay closing never
//! unlocks the page under another.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

use std::collections::BTreeSet;

use crate::consts::NO_SCROLL;
use crate::effect::{Effect, Target};

/// An overlay that may hold the scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LockHolder {
    Intro,
    Lightbox,
}

/// Tracks which overlays currently hold the page scroll lock.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: BTreeSet<LockHolder>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock for `holder`. Re-acquiring an already held lock is a no-op.
    ///
    /// Emits the body marker only on the transition from unlocked to locked.
    pub fn acquire(&mut self, holder: LockHolder, fx: &mut Vec<Effect>) {
        if self.holders.insert(holder) && self.holders.len() == 1 {
            fx.push(Effect::AddClass { target: Target::Body, class: NO_SCROLL });
        }
    }

    /// Drop the lock for `holder`. Releasing a lock that is not held is a no-op.
    ///
    /// Emits the body marker removal only when the last holder leaves.
    pub fn release(&mut self, holder: LockHolder, fx: &mut Vec<Effect>) {
        if self.holders.remove(&holder) && self.holders.is_empty() {
            fx.push(Effect::RemoveClass { target: Target::Body, class: NO_SCROLL });
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    #[must_use]
    pub fn is_held_by(&self, holder: LockHolder) -> bool {
        self.holders.contains(&holder)
    }

    /// Number of overlays currently holding the lock.
    #[must_use]
    pub fn count(&self) -> usize {
        self.holders.len()
    }
}
