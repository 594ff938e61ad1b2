//! Leaf helpers shared by several controllers.

pub mod debounce;
pub mod viewport;
