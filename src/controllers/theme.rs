//! Persisted light/dark theme with a shrink-and-swap transition.
//!
//! Toggling shrinks the page body first, swaps the palette once the shrink is
//! visible, then restores full scale. The swap reads the theme at fire time,
//! so rapid toggles each swap once and pairs cancel out.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
use crate::consts::THEME_ATTR;
use crate::controller::{Controller, Ctx};
use crate::effect::{Effect, Target};
use crate::timer::TimerKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Anything other than `"dark"` resolves to light.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeToggle {
    config: ThemeConfig,
    theme: Theme,
}

impl ThemeToggle {
    #[must_use]
    pub fn new(config: ThemeConfig, stored: Option<&str>) -> Self {
        Self { config, theme: Theme::parse(stored) }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Start the toggle transition. The palette swaps on [`TimerKey::ThemeSwap`].
    pub fn toggle(&mut self, ctx: &mut Ctx<'_>) {
        ctx.emit(Effect::style(Target::Body, "transition", self.config.transition.clone()));
        ctx.emit(Effect::style(Target::Body, "transform", format!("scale({})", self.config.shrink_scale)));
        ctx.start_timer(TimerKey::ThemeSwap, self.config.swap_delay_ms);
    }

    fn swap(&mut self, ctx: &mut Ctx<'_>) {
        self.theme = self.theme.toggled();
        log::debug!("theme: switched to {}", self.theme.as_str());
        ctx.emit(Effect::SetAttribute { target: Target::Html, name: THEME_ATTR, value: self.theme.as_str().to_owned() });
        ctx.emit(Effect::Store { key: self.config.storage_key.clone(), value: self.theme.as_str().to_owned() });
        ctx.start_timer(TimerKey::ThemeRestore, self.config.restore_delay_ms);
    }
}

impl Controller for ThemeToggle {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn attach(&mut self, ctx: &mut Ctx<'_>) {
        ctx.emit(Effect::SetAttribute { target: Target::Html, name: THEME_ATTR, value: self.theme.as_str().to_owned() });
    }

    fn on_timer(&mut self, key: TimerKey, ctx: &mut Ctx<'_>) {
        match key {
            TimerKey::ThemeSwap => self.swap(ctx),
            TimerKey::ThemeRestore => ctx.emit(Effect::style(Target::Body, "transform", "scale(1)")),
            _ => {}
        }
    }
}
