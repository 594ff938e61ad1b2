//! Controller lifecycle and the context the dispatcher passes to it.
//!
//! A controller owns one feature area of the page. The [`crate::page::Page`]
//! dispatcher pushes shared inputs (scroll, viewport class, frames, keys,
//! timer expiry) to every attached controller through this trait; inputs
//! that only concern one controller (a click on its own control) are called
//! on the controller directly.

use crate::effect::Effect;
use crate::scroll_lock::{LockHolder, ScrollLock};
use crate::timer::TimerKey;
use crate::util::viewport::ViewportClass;

/// Shared state handed to a controller for the duration of one input.
#[derive(Debug)]
pub struct Ctx<'a> {
    /// Effect sink, applied by the host in order.
    pub fx: &'a mut Vec<Effect>,
    /// Page scroll lock shared by overlays.
    pub lock: &'a mut ScrollLock,
    /// Latest vertical scroll offset.
    pub scroll_y: f64,
    /// Latest viewport class.
    pub viewport: ViewportClass,
    /// Document offsets of the top-level sections, in document order.
    pub section_tops: &'a [f64],
}

impl Ctx<'_> {
    pub fn emit(&mut self, effect: Effect) {
        self.fx.push(effect);
    }

    pub fn lock_scroll(&mut self, holder: LockHolder) {
        self.lock.acquire(holder, self.fx);
    }

    pub fn unlock_scroll(&mut self, holder: LockHolder) {
        self.lock.release(holder, self.fx);
    }

    pub fn start_timer(&mut self, key: TimerKey, delay_ms: u32) {
        self.fx.push(Effect::StartTimer { key, delay_ms });
    }
}

/// An independently attached unit of page behavior.
///
/// Every input has a no-op default; controllers override what they consume.
pub trait Controller {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Bind to the document. Called once, before any other input.
    fn attach(&mut self, _ctx: &mut Ctx<'_>) {}

    /// Release anything the controller holds on the shared page state.
    fn detach(&mut self, _ctx: &mut Ctx<'_>) {}

    /// The page scrolled; [`Ctx::scroll_y`] holds the new offset.
    fn on_scroll(&mut self, _ctx: &mut Ctx<'_>) {}

    /// The viewport class changed; [`Ctx::viewport`] holds the new class.
    fn on_viewport(&mut self, _ctx: &mut Ctx<'_>) {}

    /// A display frame elapsed.
    fn on_frame(&mut self, _ctx: &mut Ctx<'_>) {}

    /// A key was pressed anywhere in the document.
    fn on_key(&mut self, _key: &str, _ctx: &mut Ctx<'_>) {}

    /// A timer fired. Controllers ignore keys they did not arm.
    fn on_timer(&mut self, _key: TimerKey, _ctx: &mut Ctx<'_>) {}
}
