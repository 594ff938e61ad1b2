//! Visibility-driven reveals: scroll reveal, skill bars, section markers,
//! and lazy images.
//!
//! Each group is its own observer with its own per-element state, so groups
//! never suppress one another. An element moves
//! `Unobserved → Watching → Fired`; fire-once groups also ask the host to
//! stop observing the element when it fires. Section markers keep being
//! observed but only act on the first crossing.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::{ObserverConfig, RevealConfig};
use crate::consts::{LOADED, PROGRESS_VAR, REVEALED, SECTION_VISIBLE};
use crate::controller::{Controller, Ctx};
use crate::effect::{Effect, Target};
use crate::timer::TimerKey;

/// Which visibility group an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Elements flagged for a generic reveal.
    Reveal,
    /// Skill items with a target fill percentage.
    Skill,
    /// Top-level sections.
    Section,
    /// Images with a deferred source.
    LazyImage,
}

impl RevealKind {
    #[must_use]
    pub fn target(self, index: usize) -> Target {
        match self {
            Self::Reveal => Target::RevealItem(index),
            Self::Skill => Target::SkillItem(index),
            Self::Section => Target::Section(index),
            Self::LazyImage => Target::LazyImage(index),
        }
    }

    /// Whether the host stops observing an element once it fires.
    #[must_use]
    pub fn fires_once(self) -> bool {
        !matches!(self, Self::Section)
    }

    fn name(self) -> &'static str {
        match self {
            Self::Reveal => "reveal",
            Self::Skill => "skills",
            Self::Section => "sections",
            Self::LazyImage => "lazy-images",
        }
    }
}

/// Per-element visibility state. Never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unobserved,
    Watching,
    Fired,
}

#[derive(Debug, Clone)]
pub struct RevealGroup {
    kind: RevealKind,
    observer: ObserverConfig,
    states: Vec<RevealState>,
    /// Per-element data: fill percentage for skills, deferred source for lazy images.
    payload: Vec<String>,
    stagger_delay_ms: u32,
    stagger_apply_ms: u32,
    stagger_step_s: f64,
}

impl RevealGroup {
    fn with_payload(kind: RevealKind, observer: ObserverConfig, payload: Vec<String>, config: &RevealConfig) -> Self {
        Self {
            kind,
            observer,
            states: vec![RevealState::Unobserved; payload.len()],
            payload,
            stagger_delay_ms: config.stagger_delay_ms,
            stagger_apply_ms: config.stagger_apply_ms,
            stagger_step_s: config.stagger_step_s,
        }
    }

    #[must_use]
    pub fn reveal(count: usize, config: &RevealConfig) -> Self {
        Self::with_payload(RevealKind::Reveal, config.reveal.clone(), vec![String::new(); count], config)
    }

    #[must_use]
    pub fn skills(progress: Vec<String>, config: &RevealConfig) -> Self {
        Self::with_payload(RevealKind::Skill, config.skills.clone(), progress, config)
    }

    #[must_use]
    pub fn sections(count: usize, config: &RevealConfig) -> Self {
        Self::with_payload(RevealKind::Section, config.sections.clone(), vec![String::new(); count], config)
    }

    #[must_use]
    pub fn lazy_images(sources: Vec<String>, config: &RevealConfig) -> Self {
        Self::with_payload(RevealKind::LazyImage, config.lazy_images.clone(), sources, config)
    }

    #[must_use]
    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    /// Intersection options the host builds this group's observer with.
    #[must_use]
    pub fn observer(&self) -> &ObserverConfig {
        &self.observer
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Element `index` crossed this group's visibility threshold.
    pub fn intersected(&mut self, index: usize, ctx: &mut Ctx<'_>) {
        if self.states.get(index) != Some(&RevealState::Watching) {
            return;
        }
        self.states[index] = RevealState::Fired;
        let target = self.kind.target(index);
        match self.kind {
            RevealKind::Reveal => ctx.emit(Effect::AddClass { target: target.clone(), class: REVEALED }),
            RevealKind::Skill => {
                let progress = self.payload[index].trim();
                ctx.emit(Effect::style(Target::SkillBar(index), PROGRESS_VAR, format!("{progress}%")));
                ctx.emit(Effect::AddClass { target: target.clone(), class: REVEALED });
            }
            RevealKind::Section => ctx.emit(Effect::AddClass { target: target.clone(), class: SECTION_VISIBLE }),
            RevealKind::LazyImage => {
                ctx.emit(Effect::SetAttribute { target: target.clone(), name: "src", value: self.payload[index].clone() });
                ctx.emit(Effect::AddClass { target: target.clone(), class: LOADED });
            }
        }
        if self.kind.fires_once() {
            ctx.emit(Effect::Unobserve { target });
        }
    }

    /// The window finished loading: schedule the reveal stagger.
    pub fn loaded(&mut self, ctx: &mut Ctx<'_>) {
        if self.kind != RevealKind::Reveal {
            return;
        }
        ctx.start_timer(TimerKey::LoadStagger, self.stagger_delay_ms);
    }

    #[allow(clippy::cast_precision_loss)]
    fn apply_stagger(&self, ctx: &mut Ctx<'_>) {
        for index in 0..self.states.len() {
            let delay_ms = (index as f64 * self.stagger_step_s * 1000.0).round();
            ctx.emit(Effect::style(self.kind.target(index), "transition-delay", format!("{delay_ms}ms")));
        }
    }
}

impl Controller for RevealGroup {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn attach(&mut self, _ctx: &mut Ctx<'_>) {
        for state in &mut self.states {
            if *state == RevealState::Unobserved {
                *state = RevealState::Watching;
            }
        }
    }

    fn on_timer(&mut self, key: TimerKey, ctx: &mut Ctx<'_>) {
        if self.kind != RevealKind::Reveal {
            return;
        }
        match key {
            TimerKey::LoadStagger => ctx.start_timer(TimerKey::LoadStaggerApply, self.stagger_apply_ms),
            TimerKey::LoadStaggerApply => self.apply_stagger(ctx),
            _ => {}
        }
    }
}
