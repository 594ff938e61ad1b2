//! Navigation: mobile menu, smooth anchor scrolling, active-section
//! highlighting, and navbar auto-hide.
//!
//! Active-link tracking runs on every raw scroll. Auto-hide runs on its own
//! debounce, so the two may briefly disagree about where the page is.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavConfig;
use crate::consts::ACTIVE;
use crate::controller::{Controller, Ctx};
use crate::effect::{Effect, Target};
use crate::timer::TimerKey;
use crate::util::debounce::Debounce;

const NAVBAR_SHOWN: &str = "translateY(0)";
const NAVBAR_HIDDEN: &str = "translateY(-100%)";

/// Fragment of an in-page href (`"#about"` → `"about"`), if it names one.
#[must_use]
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scroll request for a generic in-page anchor.
///
/// Returns `None` for a bare `#` or an external link, in which case the
/// browser's default navigation proceeds.
#[must_use]
pub fn anchor_scroll(href: &str) -> Option<Effect> {
    fragment(href).map(|id| Effect::ScrollIntoView { target: Target::ElementId(id.to_owned()) })
}

/// Index of the last section whose top, less `offset`, is at or above `scroll_y`.
#[must_use]
pub fn current_section(scroll_y: f64, section_tops: &[f64], offset: f64) -> Option<usize> {
    section_tops.iter().rposition(|top| scroll_y >= top - offset)
}

#[derive(Debug, Clone)]
pub struct Nav {
    config: NavConfig,
    links: Vec<String>,
    sections: Vec<String>,
    active: Vec<bool>,
    menu_open: bool,
    last_settled_y: f64,
    settle: Debounce,
    navbar_hidden: bool,
}

impl Nav {
    #[must_use]
    pub fn new(config: NavConfig, links: Vec<String>, sections: Vec<String>) -> Self {
        let active = vec![false; links.len()];
        Self {
            config,
            links,
            sections,
            active,
            menu_open: false,
            last_settled_y: 0.0,
            settle: Debounce::new(),
            navbar_hidden: false,
        }
    }

    /// Flip the mobile menu open or closed.
    pub fn toggle_menu(&mut self, ctx: &mut Ctx<'_>) {
        self.menu_open = !self.menu_open;
        ctx.emit(Effect::toggle_class(Target::MobileToggle, ACTIVE, self.menu_open));
        ctx.emit(Effect::toggle_class(Target::NavMenu, ACTIVE, self.menu_open));
    }

    /// A navigation link was clicked; the host has already suppressed the default.
    pub fn link_clicked(&mut self, index: usize, ctx: &mut Ctx<'_>) {
        if let Some(id) = self.links.get(index).and_then(|href| fragment(href)) {
            let target = match self.sections.iter().position(|section| section == id) {
                Some(section) => Target::Section(section),
                None => Target::ElementId(id.to_owned()),
            };
            ctx.emit(Effect::ScrollIntoView { target });
        }
        self.menu_open = false;
        ctx.emit(Effect::RemoveClass { target: Target::MobileToggle, class: ACTIVE });
        ctx.emit(Effect::RemoveClass { target: Target::NavMenu, class: ACTIVE });
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Indices of links currently marked active.
    #[must_use]
    pub fn active_links(&self) -> Vec<usize> {
        self.active.iter().enumerate().filter_map(|(i, on)| on.then_some(i)).collect()
    }

    #[must_use]
    pub fn is_navbar_hidden(&self) -> bool {
        self.navbar_hidden
    }

    fn track_active(&mut self, ctx: &mut Ctx<'_>) {
        let current = current_section(ctx.scroll_y, ctx.section_tops, self.config.active_offset_px)
            .and_then(|i| self.sections.get(i))
            .filter(|id| !id.is_empty());
        for (i, href) in self.links.iter().enumerate() {
            let on = current.is_some_and(|id| fragment(href) == Some(id.as_str()));
            if self.active[i] != on {
                self.active[i] = on;
                ctx.emit(Effect::toggle_class(Target::NavLink(i), ACTIVE, on));
            }
        }
    }

    fn settle_navbar(&mut self, ctx: &mut Ctx<'_>) {
        let y = ctx.scroll_y;
        self.navbar_hidden = y > self.last_settled_y && y > self.config.hide_threshold_px;
        let transform = if self.navbar_hidden { NAVBAR_HIDDEN } else { NAVBAR_SHOWN };
        ctx.emit(Effect::style(Target::Navbar, "transform", transform));
        self.last_settled_y = y;
    }
}

impl Controller for Nav {
    fn name(&self) -> &'static str {
        "nav"
    }

    fn on_scroll(&mut self, ctx: &mut Ctx<'_>) {
        self.track_active(ctx);
        let generation = self.settle.trigger();
        ctx.start_timer(TimerKey::NavbarSettle(generation), self.config.settle_ms);
    }

    fn on_timer(&mut self, key: TimerKey, ctx: &mut Ctx<'_>) {
        if let TimerKey::NavbarSettle(generation) = key {
            if self.settle.is_current(generation) {
                self.settle_navbar(ctx);
            }
        }
    }
}
