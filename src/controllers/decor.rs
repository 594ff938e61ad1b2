//! Small decorative controllers: back-to-top button, parallax layers,
//! card tilt and click-to-copy contact lines.

#[cfg(test)]
#[path = "decor_test.rs"]
mod decor_test;

use crate::config::DecorConfig;
use crate::consts::{COPY_DONE, COPY_DONE_COLOR, COPY_HINT, VISIBLE};
use crate::controller::{Controller, Ctx};
use crate::effect::{Effect, Target};
use crate::timer::TimerKey;

/// Floating button that appears once the page is scrolled far enough.
#[derive(Debug, Clone)]
pub struct BackToTop {
    threshold_px: f64,
    shown: bool,
}

impl BackToTop {
    #[must_use]
    pub fn new(config: &DecorConfig) -> Self {
        Self { threshold_px: config.back_to_top_px, shown: false }
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn clicked(&self, ctx: &mut Ctx<'_>) {
        ctx.emit(Effect::ScrollToTop);
    }
}

impl Controller for BackToTop {
    fn name(&self) -> &'static str {
        "back-to-top"
    }

    fn on_scroll(&mut self, ctx: &mut Ctx<'_>) {
        let shown = ctx.scroll_y > self.threshold_px;
        if shown != self.shown {
            self.shown = shown;
            ctx.emit(Effect::toggle_class(Target::BackToTop, VISIBLE, shown));
        }
    }
}

/// Elements that drift vertically at a fraction of the scroll speed.
#[derive(Debug, Clone)]
pub struct Parallax {
    count: usize,
    speed: f64,
}

impl Parallax {
    #[must_use]
    pub fn new(count: usize, config: &DecorConfig) -> Self {
        Self { count, speed: config.parallax_speed }
    }
}

impl Controller for Parallax {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn on_scroll(&mut self, ctx: &mut Ctx<'_>) {
        let offset = ctx.scroll_y * self.speed;
        for i in 0..self.count {
            ctx.emit(Effect::style(Target::Parallax(i), "transform", format!("translateY({offset}px)")));
        }
    }
}

/// Pointer position relative to a card's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPointer {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Neutral card transform restored when the pointer leaves.
pub const TILT_REST: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";

/// Transform for a card with the pointer at `at`.
#[must_use]
pub fn tilt_transform(at: CardPointer, config: &DecorConfig) -> String {
    let rotate_x = (at.y - at.height / 2.0) / config.tilt_divisor;
    let rotate_y = (at.width / 2.0 - at.x) / config.tilt_divisor;
    let s = config.tilt_scale;
    format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) scale3d({s}, {s}, {s})")
}

/// 3D tilt on project and service cards. Disabled on mobile viewports.
#[derive(Debug, Clone)]
pub struct Tilt {
    count: usize,
    config: DecorConfig,
}

impl Tilt {
    #[must_use]
    pub fn new(count: usize, config: DecorConfig) -> Self {
        Self { count, config }
    }

    pub fn pointer_moved(&self, card: usize, at: CardPointer, ctx: &mut Ctx<'_>) {
        if card >= self.count || ctx.viewport.is_mobile() {
            return;
        }
        ctx.emit(Effect::style(Target::Card(card), "transform", tilt_transform(at, &self.config)));
    }

    pub fn pointer_left(&self, card: usize, ctx: &mut Ctx<'_>) {
        if card >= self.count || ctx.viewport.is_mobile() {
            return;
        }
        ctx.emit(Effect::style(Target::Card(card), "transform", TILT_REST));
    }
}

impl Controller for Tilt {
    fn name(&self) -> &'static str {
        "tilt"
    }

    fn on_viewport(&mut self, ctx: &mut Ctx<'_>) {
        // A card tilted before the switch to mobile would otherwise stay tilted.
        if ctx.viewport.is_mobile() {
            for i in 0..self.count {
                ctx.emit(Effect::style(Target::Card(i), "transform", TILT_REST));
            }
        }
    }
}

#[derive(Debug, Clone)]
struct ContactLine {
    text: String,
    copyable: bool,
}

/// Contact lines holding an email address copy it on click.
#[derive(Debug, Clone)]
pub struct ClipboardLines {
    lines: Vec<ContactLine>,
    feedback_ms: u32,
}

impl ClipboardLines {
    #[must_use]
    pub fn new(texts: Vec<String>, config: &DecorConfig) -> Self {
        let lines = texts
            .into_iter()
            .map(|text| ContactLine { copyable: text.contains('@'), text })
            .collect();
        Self { lines, feedback_ms: config.copy_feedback_ms }
    }

    #[must_use]
    pub fn is_copyable(&self, line: usize) -> bool {
        self.lines.get(line).is_some_and(|l| l.copyable)
    }

    /// Ask the host to write the line's text to the clipboard.
    pub fn clicked(&self, line: usize, ctx: &mut Ctx<'_>) {
        let Some(entry) = self.lines.get(line).filter(|l| l.copyable) else {
            return;
        };
        ctx.emit(Effect::CopyToClipboard { line, text: entry.text.trim().to_owned() });
    }

    /// The clipboard write succeeded; show the confirmation.
    pub fn copied(&self, line: usize, ctx: &mut Ctx<'_>) {
        if !self.is_copyable(line) {
            return;
        }
        ctx.emit(Effect::SetText { target: Target::ContactLine(line), text: COPY_DONE.to_owned() });
        ctx.emit(Effect::style(Target::ContactLine(line), "color", COPY_DONE_COLOR));
        ctx.start_timer(TimerKey::CopyRevert(line), self.feedback_ms);
    }
}

impl Controller for ClipboardLines {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn attach(&mut self, ctx: &mut Ctx<'_>) {
        for (i, line) in self.lines.iter().enumerate().filter(|(_, l)| l.copyable) {
            ctx.emit(Effect::style(Target::ContactLine(i), "cursor", "pointer"));
            ctx.emit(Effect::SetAttribute {
                target: Target::ContactLine(i),
                name: "title",
                value: COPY_HINT.to_owned(),
            });
            log::trace!("clipboard: line {i} copyable ({} chars)", line.text.len());
        }
    }

    fn on_timer(&mut self, key: TimerKey, ctx: &mut Ctx<'_>) {
        let TimerKey::CopyRevert(line) = key else {
            return;
        };
        let Some(entry) = self.lines.get(line) else {
            return;
        };
        ctx.emit(Effect::SetText { target: Target::ContactLine(line), text: entry.text.clone() });
        ctx.emit(Effect::style(Target::ContactLine(line), "color", ""));
    }
}
