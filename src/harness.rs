//! In-memory test doubles for the interaction core.
//!
//! [`Rig`] hands a single controller a [`Ctx`] and collects what it emits.
//! [`Site`] drives a whole [`Page`] against a [`FakeDom`] and a virtual
//! [`Clock`], so delayed behavior can be asserted at exact instants.

use std::collections::{BTreeSet, HashMap};

use crate::blueprint::{Blueprint, GalleryItemSpec, GallerySpec};
use crate::config::Config;
use crate::controller::Ctx;
use crate::effect::{Effect, Target};
use crate::page::Page;
use crate::scroll_lock::ScrollLock;
use crate::timer::TimerKey;
use crate::util::viewport::ViewportClass;

/// Shared page state for driving one controller in isolation.
#[derive(Debug, Default)]
pub struct Rig {
    pub lock: ScrollLock,
    pub scroll_y: f64,
    pub viewport: ViewportClass,
    pub section_tops: Vec<f64>,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with a fresh effect sink and return what it emitted.
    pub fn run(&mut self, f: impl FnOnce(&mut Ctx<'_>)) -> Vec<Effect> {
        let mut fx = Vec::new();
        let mut ctx = Ctx {
            fx: &mut fx,
            lock: &mut self.lock,
            scroll_y: self.scroll_y,
            viewport: self.viewport,
            section_tops: &self.section_tops,
        };
        f(&mut ctx);
        fx
    }
}

/// Element state after applying effects.
#[derive(Debug, Default)]
pub struct FakeDom {
    classes: HashMap<Target, BTreeSet<&'static str>>,
    styles: HashMap<(Target, &'static str), String>,
    attributes: HashMap<(Target, &'static str), String>,
    text: HashMap<Target, String>,
    pub storage: HashMap<String, String>,
    pub clipboard: Vec<String>,
    pub scrolled_to: Vec<Target>,
    pub scrolled_to_top: usize,
    pub form_resets: usize,
    pub unobserved: Vec<Target>,
    pub particles: BTreeSet<u32>,
    pub spawned: usize,
}

impl FakeDom {
    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::AddClass { target, class } => {
                self.classes.entry(target.clone()).or_default().insert(*class);
            }
            Effect::RemoveClass { target, class } => {
                if let Some(set) = self.classes.get_mut(target) {
                    set.remove(class);
                }
            }
            Effect::SetStyle { target, property, value } => {
                self.styles.insert((target.clone(), *property), value.clone());
            }
            Effect::SetAttribute { target, name, value } => {
                self.attributes.insert((target.clone(), *name), value.clone());
            }
            Effect::SetText { target, text } => {
                self.text.insert(target.clone(), text.clone());
            }
            Effect::ResetForm => self.form_resets += 1,
            Effect::ScrollIntoView { target } => self.scrolled_to.push(target.clone()),
            Effect::ScrollToTop => self.scrolled_to_top += 1,
            Effect::Store { key, value } => {
                self.storage.insert(key.clone(), value.clone());
            }
            Effect::CopyToClipboard { text, .. } => self.clipboard.push(text.clone()),
            Effect::Unobserve { target } => self.unobserved.push(target.clone()),
            Effect::SpawnParticle { id, .. } => {
                self.particles.insert(*id);
                self.spawned += 1;
            }
            Effect::Remove { target } => {
                if let Target::Particle(id) = target {
                    self.particles.remove(id);
                }
            }
            Effect::StartTimer { .. } => {}
        }
    }

    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.classes.get(target).is_some_and(|set| set.contains(class))
    }

    pub fn style(&self, target: &Target, property: &'static str) -> Option<&str> {
        self.styles.get(&(target.clone(), property)).map(String::as_str)
    }

    pub fn attribute(&self, target: &Target, name: &'static str) -> Option<&str> {
        self.attributes.get(&(target.clone(), name)).map(String::as_str)
    }

    pub fn text(&self, target: &Target) -> Option<&str> {
        self.text.get(target).map(String::as_str)
    }
}

#[derive(Debug)]
struct Pending {
    due_ms: u64,
    seq: u64,
    key: TimerKey,
}

/// Virtual millisecond clock holding armed one-shot timers.
#[derive(Debug, Default)]
pub struct Clock {
    now_ms: u64,
    seq: u64,
    pending: Vec<Pending>,
}

impl Clock {
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule(&mut self, key: TimerKey, delay_ms: u32) {
        self.seq += 1;
        self.pending.push(Pending { due_ms: self.now_ms + u64::from(delay_ms), seq: self.seq, key });
    }

    /// Remove and return the earliest timer due at or before `until_ms`,
    /// moving the clock to its due time. Ties fire in arming order.
    fn pop_due(&mut self, until_ms: u64) -> Option<TimerKey> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))?;
        let pending = self.pending.swap_remove(index);
        self.now_ms = pending.due_ms;
        Some(pending.key)
    }
}

/// A whole page wired to the fake document and the virtual clock.
#[derive(Debug)]
pub struct Site {
    pub page: Page,
    pub dom: FakeDom,
    pub clock: Clock,
}

impl Site {
    /// Mount and attach `blueprint` with default configuration.
    pub fn new(blueprint: Blueprint) -> Self {
        Self::with_config(Config::site_default(), blueprint)
    }

    pub fn with_config(config: Config, blueprint: Blueprint) -> Self {
        let mut site = Self { page: Page::new(config, blueprint, 7), dom: FakeDom::default(), clock: Clock::default() };
        let fx = site.page.attach();
        site.apply(&fx);
        site
    }

    pub fn apply(&mut self, fx: &[Effect]) {
        for effect in fx {
            if let Effect::StartTimer { key, delay_ms } = effect {
                self.clock.schedule(*key, *delay_ms);
            }
            self.dom.apply(effect);
        }
    }

    /// Feed one input to the page and apply its effects.
    pub fn act(&mut self, f: impl FnOnce(&mut Page) -> Vec<Effect>) -> Vec<Effect> {
        let fx = f(&mut self.page);
        self.apply(&fx);
        fx
    }

    /// Advance the clock by `ms`, firing every timer that falls due on the
    /// way, including timers armed by earlier firings.
    pub fn advance(&mut self, ms: u64) {
        let until = self.clock.now_ms + ms;
        while let Some(key) = self.clock.pop_due(until) {
            let fx = self.page.on_timer(key);
            self.apply(&fx);
        }
        self.clock.now_ms = until;
    }

    pub fn frames(&mut self, count: usize) {
        for _ in 0..count {
            let fx = self.page.on_frame();
            self.apply(&fx);
        }
    }
}

/// A blueprint with every group of the portfolio page present.
pub fn full_blueprint() -> Blueprint {
    let sections: Vec<String> = ["home", "about", "gallery", "contact"].map(String::from).to_vec();
    Blueprint {
        cursor: true,
        intro: true,
        nav_links: Some(sections.iter().map(|id| format!("#{id}")).collect()),
        sections,
        theme_toggle: true,
        stored_theme: None,
        reveal_count: 3,
        skill_progress: vec!["90".to_owned(), " 75 ".to_owned()],
        lazy_images: vec!["img/lazy.jpg".to_owned()],
        gallery: Some(GallerySpec {
            filters: ["all", "3d", "2d", "vfx"].map(String::from).to_vec(),
            items: vec![
                GalleryItemSpec::new("3d", "img/1.jpg"),
                GalleryItemSpec::new("2d", "img/2.jpg"),
                GalleryItemSpec::new("3d", "img/3.jpg"),
                GalleryItemSpec::new("vfx", "img/4.jpg"),
                GalleryItemSpec::new("2d", "img/5.jpg"),
            ],
            lightbox: true,
        }),
        form: true,
        back_to_top: true,
        parallax_count: 1,
        logo: true,
        card_count: 2,
        contact_lines: vec!["contact@example.com".to_owned(), "Bamako, Mali".to_owned()],
        viewport_width: 1280.0,
    }
}
