//! Custom cursor: a lagging ring and a faster dot eased toward the pointer.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::config::CursorConfig;
use crate::consts::HOVER;
use crate::controller::{Controller, Ctx};
use crate::effect::{Effect, Target};

/// A 2D position in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move `factor` of the remaining distance toward `target`.
    #[must_use]
    pub fn ease_toward(self, target: Self, factor: f64) -> Self {
        Self { x: self.x + (target.x - self.x) * factor, y: self.y + (target.y - self.y) * factor }
    }
}

#[derive(Debug, Clone)]
pub struct Cursor {
    config: CursorConfig,
    pointer: Point,
    ring: Point,
    dot: Point,
    hovering: bool,
}

impl Cursor {
    #[must_use]
    pub fn new(config: CursorConfig) -> Self {
        Self { config, pointer: Point::default(), ring: Point::default(), dot: Point::default(), hovering: false }
    }

    /// Record the raw pointer position; followers catch up on the next frames.
    pub fn pointer_moved(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    /// The pointer entered or left a link, button, or gallery tile.
    pub fn hover(&mut self, entered: bool, fx: &mut Vec<Effect>) {
        self.hovering = entered;
        fx.push(Effect::toggle_class(Target::Cursor, HOVER, entered));
    }

    #[must_use]
    pub fn ring(&self) -> Point {
        self.ring
    }

    #[must_use]
    pub fn dot(&self) -> Point {
        self.dot
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
}

fn place(target: Target, at: Point, ctx: &mut Ctx<'_>) {
    ctx.emit(Effect::style(target.clone(), "left", format!("{}px", at.x)));
    ctx.emit(Effect::style(target, "top", format!("{}px", at.y)));
}

impl Controller for Cursor {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn on_frame(&mut self, ctx: &mut Ctx<'_>) {
        self.ring = self.ring.ease_toward(self.pointer, self.config.ring_smoothing);
        self.dot = self.dot.ease_toward(self.pointer, self.config.dot_smoothing);
        place(Target::Cursor, self.ring, ctx);
        place(Target::CursorDot, self.dot, ctx);
    }
}
