//! Intro sequence: typed title, scroll lock, and a two-phase exit.
//!
//! ```text
//! Idle ──start delay──▶ Typing ──last char──▶ Ready
//!   │                     │                     │
//!   └──────── confirm ────┴──────── confirm ────┘
//!                         ▼
//!                      Exiting ──grace──▶ Hidden
//! ```
//!
//! Confirmation flips the exit class immediately so the stylesheet
//! transition can run, and the structural hide waits out the grace period.
//! The sequence never re-enters once confirmed.

#[cfg(test)]
#[path = "intro_test.rs"]
mod intro_test;

use crate::config::IntroConfig;
use crate::consts::{HIDDEN, VISIBLE};
use crate::controller::{Controller, Ctx};
use crate::effect::{Effect, Target};
use crate::scroll_lock::LockHolder;
use crate::timer::TimerKey;

/// Where the intro sequence is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    /// Attached; waiting out the start delay.
    Idle,
    /// `typed` characters of the title are shown.
    Typing { typed: usize },
    /// The whole title is shown; waiting for confirmation.
    Ready,
    /// Confirmed; the exit transition is running.
    Exiting,
    /// Structurally hidden; content and navbar are visible.
    Hidden,
}

#[derive(Debug, Clone)]
pub struct Intro {
    config: IntroConfig,
    title: Vec<char>,
    phase: IntroPhase,
}

impl Intro {
    #[must_use]
    pub fn new(config: IntroConfig) -> Self {
        let title = config.title.chars().collect();
        Self { config, title, phase: IntroPhase::Idle }
    }

    #[must_use]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// The user confirmed entry. Ignored once the exit has started.
    pub fn confirm(&mut self, ctx: &mut Ctx<'_>) {
        match self.phase {
            IntroPhase::Idle | IntroPhase::Typing { .. } | IntroPhase::Ready => {
                log::debug!("intro: confirmed");
                self.phase = IntroPhase::Exiting;
                ctx.emit(Effect::AddClass { target: Target::Intro, class: HIDDEN });
                ctx.start_timer(TimerKey::IntroExit, self.config.exit_grace_ms);
            }
            IntroPhase::Exiting | IntroPhase::Hidden => {}
        }
    }

    fn type_next(&mut self, ctx: &mut Ctx<'_>) {
        let typed = match self.phase {
            IntroPhase::Idle => 0,
            IntroPhase::Typing { typed } => typed,
            IntroPhase::Ready | IntroPhase::Exiting | IntroPhase::Hidden => return,
        };
        if typed >= self.title.len() {
            self.phase = IntroPhase::Ready;
            return;
        }
        let typed = typed + 1;
        ctx.emit(Effect::SetText { target: Target::IntroTitle, text: self.title[..typed].iter().collect() });
        if typed == self.title.len() {
            self.phase = IntroPhase::Ready;
        } else {
            self.phase = IntroPhase::Typing { typed };
            ctx.start_timer(TimerKey::IntroType, self.config.char_interval_ms);
        }
    }

    fn finish_exit(&mut self, ctx: &mut Ctx<'_>) {
        if self.phase != IntroPhase::Exiting {
            return;
        }
        self.phase = IntroPhase::Hidden;
        ctx.emit(Effect::style(Target::Intro, "display", "none"));
        ctx.emit(Effect::AddClass { target: Target::MainContent, class: VISIBLE });
        ctx.emit(Effect::AddClass { target: Target::Navbar, class: VISIBLE });
        ctx.unlock_scroll(LockHolder::Intro);
    }
}

impl Controller for Intro {
    fn name(&self) -> &'static str {
        "intro"
    }

    fn attach(&mut self, ctx: &mut Ctx<'_>) {
        ctx.lock_scroll(LockHolder::Intro);
        ctx.start_timer(TimerKey::IntroType, self.config.start_delay_ms);
    }

    fn detach(&mut self, ctx: &mut Ctx<'_>) {
        ctx.unlock_scroll(LockHolder::Intro);
    }

    fn on_timer(&mut self, key: TimerKey, ctx: &mut Ctx<'_>) {
        match key {
            TimerKey::IntroType => self.type_next(ctx),
            TimerKey::IntroExit => self.finish_exit(ctx),
            _ => {}
        }
    }
}
