//! Central dispatcher.
//!
//! [`Page`] owns every controller mounted from the [`Blueprint`], the shared
//! scroll lock, and the latest scroll offset and viewport class. Shared
//! inputs are broadcast to every attached controller; targeted inputs go to
//! the controller that owns the control. Every method returns the effects
//! the host must apply, in order.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::blueprint::Blueprint;
use crate::config::Config;
use crate::controller::{Controller, Ctx};
use crate::controllers::cursor::{Cursor, Point};
use crate::controllers::decor::{BackToTop, CardPointer, ClipboardLines, Parallax, Tilt};
use crate::controllers::device::DeviceMarker;
use crate::controllers::form::{ContactForm, Field, FormValues};
use crate::controllers::gallery::Gallery;
use crate::controllers::intro::Intro;
use crate::controllers::nav::{Nav, anchor_scroll};
use crate::controllers::particles::Particles;
use crate::controllers::reveal::{RevealGroup, RevealKind};
use crate::controllers::theme::ThemeToggle;
use crate::consts::LOADED;
use crate::effect::{Effect, Target};
use crate::scroll_lock::ScrollLock;
use crate::timer::TimerKey;
use crate::util::debounce::Debounce;
use crate::util::viewport::ViewportClass;

/// Every controller the page may own. Optional ones are `None` when their
/// elements were absent at mount.
#[derive(Debug)]
struct Controllers {
    device: DeviceMarker,
    cursor: Option<Cursor>,
    intro: Option<Intro>,
    nav: Option<Nav>,
    theme: Option<ThemeToggle>,
    reveals: Vec<RevealGroup>,
    gallery: Option<Gallery>,
    form: Option<ContactForm>,
    back_to_top: Option<BackToTop>,
    parallax: Option<Parallax>,
    tilt: Option<Tilt>,
    clipboard: Option<ClipboardLines>,
    particles: Option<Particles>,
}

impl Controllers {
    fn mount(config: &Config, blueprint: Blueprint, seed: u64) -> Self {
        let reveal = &config.reveal;
        let reveals = [
            RevealGroup::reveal(blueprint.reveal_count, reveal),
            RevealGroup::skills(blueprint.skill_progress, reveal),
            RevealGroup::sections(blueprint.sections.len(), reveal),
            RevealGroup::lazy_images(blueprint.lazy_images, reveal),
        ]
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect();

        Self {
            device: DeviceMarker,
            cursor: blueprint.cursor.then(|| Cursor::new(config.cursor.clone())),
            intro: blueprint.intro.then(|| Intro::new(config.intro.clone())),
            nav: blueprint.nav_links.map(|links| Nav::new(config.nav.clone(), links, blueprint.sections)),
            theme: blueprint
                .theme_toggle
                .then(|| ThemeToggle::new(config.theme.clone(), blueprint.stored_theme.as_deref())),
            reveals,
            gallery: blueprint.gallery.map(Gallery::new),
            form: blueprint.form.then(|| ContactForm::new(config.form.clone())),
            back_to_top: blueprint.back_to_top.then(|| BackToTop::new(&config.decor)),
            parallax: (blueprint.parallax_count > 0).then(|| Parallax::new(blueprint.parallax_count, &config.decor)),
            tilt: (blueprint.card_count > 0).then(|| Tilt::new(blueprint.card_count, config.decor.clone())),
            clipboard: (!blueprint.contact_lines.is_empty())
                .then(|| ClipboardLines::new(blueprint.contact_lines, &config.decor)),
            particles: blueprint.logo.then(|| Particles::new(config.particles.clone(), seed)),
        }
    }

    fn all_mut(&mut self) -> Vec<&mut dyn Controller> {
        let mut all: Vec<&mut dyn Controller> = vec![&mut self.device];
        if let Some(c) = self.intro.as_mut() {
            all.push(c);
        }
        if let Some(c) = self.cursor.as_mut() {
            all.push(c);
        }
        if let Some(c) = self.nav.as_mut() {
            all.push(c);
        }
        if let Some(c) = self.theme.as_mut() {
            all.push(c);
        }
        for group in &mut self.reveals {
            all.push(group);
        }
        if let Some(c) = self.gallery.as_mut() {
            all.push(c);
        }
        if let Some(c) = self.form.as_mut() {
            all.push(c);
        }
        if let Some(c) = self.back_to_top.as_mut() {
            all.push(c);
        }
        if let Some(c) = self.parallax.as_mut() {
            all.push(c);
        }
        if let Some(c) = self.tilt.as_mut() {
            all.push(c);
        }
        if let Some(c) = self.clipboard.as_mut() {
            all.push(c);
        }
        if let Some(c) = self.particles.as_mut() {
            all.push(c);
        }
        all
    }
}

#[derive(Debug)]
pub struct Page {
    config: Config,
    controllers: Controllers,
    lock: ScrollLock,
    scroll_y: f64,
    viewport: ViewportClass,
    pending_width: f64,
    resize: Debounce,
    section_tops: Vec<f64>,
    attached: bool,
}

impl Page {
    /// Mount a controller for every group present in `blueprint`.
    ///
    /// `seed` feeds the particle burst randomness.
    #[must_use]
    pub fn new(config: Config, blueprint: Blueprint, seed: u64) -> Self {
        let viewport = ViewportClass::classify(blueprint.viewport_width, &config.viewport);
        let pending_width = blueprint.viewport_width;
        let controllers = Controllers::mount(&config, blueprint, seed);
        Self {
            config,
            controllers,
            lock: ScrollLock::new(),
            scroll_y: 0.0,
            viewport,
            pending_width,
            resize: Debounce::new(),
            section_tops: Vec::new(),
            attached: false,
        }
    }

    fn with(&mut self, f: impl FnOnce(&mut Controllers, &mut Ctx<'_>)) -> Vec<Effect> {
        let mut fx = Vec::new();
        let mut ctx = Ctx {
            fx: &mut fx,
            lock: &mut self.lock,
            scroll_y: self.scroll_y,
            viewport: self.viewport,
            section_tops: &self.section_tops,
        };
        f(&mut self.controllers, &mut ctx);
        fx
    }

    fn broadcast(&mut self, mut f: impl FnMut(&mut dyn Controller, &mut Ctx<'_>)) -> Vec<Effect> {
        if !self.attached {
            return Vec::new();
        }
        self.with(|controllers, ctx| {
            for controller in controllers.all_mut() {
                f(controller, ctx);
            }
        })
    }

    // --- Lifecycle ---

    /// Bind every controller to the document. Runs once; later calls are no-ops.
    pub fn attach(&mut self) -> Vec<Effect> {
        if self.attached {
            return Vec::new();
        }
        self.attached = true;
        self.broadcast(|controller, ctx| {
            log::debug!("attach {}", controller.name());
            controller.attach(ctx);
        })
    }

    /// Release held scroll locks and transient overlay state.
    pub fn detach(&mut self) -> Vec<Effect> {
        let fx = self.broadcast(|controller, ctx| {
            log::debug!("detach {}", controller.name());
            controller.detach(ctx);
        });
        self.attached = false;
        fx
    }

    // --- Broadcast inputs ---

    /// The page scrolled to `scroll_y`; `section_tops` are the current
    /// document offsets of the top-level sections.
    pub fn on_scroll(&mut self, scroll_y: f64, section_tops: &[f64]) -> Vec<Effect> {
        self.scroll_y = scroll_y;
        self.section_tops.clear();
        self.section_tops.extend_from_slice(section_tops);
        self.broadcast(|controller, ctx| controller.on_scroll(ctx))
    }

    /// The window was resized. The viewport class is re-evaluated once the
    /// resize burst settles.
    pub fn on_resize(&mut self, width: f64) -> Vec<Effect> {
        self.pending_width = width;
        let generation = self.resize.trigger();
        vec![Effect::StartTimer {
            key: TimerKey::ResizeSettle(generation),
            delay_ms: self.config.viewport.resize_settle_ms,
        }]
    }

    pub fn on_frame(&mut self) -> Vec<Effect> {
        self.broadcast(|controller, ctx| controller.on_frame(ctx))
    }

    pub fn on_key(&mut self, key: &str) -> Vec<Effect> {
        self.broadcast(|controller, ctx| controller.on_key(key, ctx))
    }

    pub fn on_timer(&mut self, key: TimerKey) -> Vec<Effect> {
        if let TimerKey::ResizeSettle(generation) = key {
            return self.settle_resize(generation);
        }
        self.broadcast(|controller, ctx| controller.on_timer(key, ctx))
    }

    fn settle_resize(&mut self, generation: u64) -> Vec<Effect> {
        if !self.resize.is_current(generation) {
            return Vec::new();
        }
        let viewport = ViewportClass::classify(self.pending_width, &self.config.viewport);
        if viewport == self.viewport {
            return Vec::new();
        }
        log::debug!("viewport {:?} -> {viewport:?}", self.viewport);
        self.viewport = viewport;
        self.broadcast(|controller, ctx| controller.on_viewport(ctx))
    }

    /// The window finished loading: mark the body and start the reveal stagger.
    pub fn loaded(&mut self) -> Vec<Effect> {
        if !self.attached {
            return Vec::new();
        }
        self.with(|c, ctx| {
            ctx.emit(Effect::AddClass { target: Target::Body, class: LOADED });
            for group in &mut c.reveals {
                group.loaded(ctx);
            }
        })
    }

    // --- Targeted inputs ---

    pub fn pointer_moved(&mut self, at: Point) {
        if let Some(cursor) = self.controllers.cursor.as_mut() {
            cursor.pointer_moved(at);
        }
    }

    /// The pointer entered (`true`) or left a hover target.
    pub fn hover(&mut self, entered: bool) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(cursor) = c.cursor.as_mut() {
                cursor.hover(entered, ctx.fx);
            }
        })
    }

    pub fn confirm_intro(&mut self) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(intro) = c.intro.as_mut() {
                intro.confirm(ctx);
            }
        })
    }

    pub fn toggle_menu(&mut self) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(nav) = c.nav.as_mut() {
                nav.toggle_menu(ctx);
            }
        })
    }

    pub fn nav_link_clicked(&mut self, index: usize) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(nav) = c.nav.as_mut() {
                nav.link_clicked(index, ctx);
            }
        })
    }

    /// Any other in-page anchor was clicked. Empty when `href` is not a
    /// usable fragment, in which case the default navigation should proceed.
    pub fn anchor_clicked(&self, href: &str) -> Vec<Effect> {
        if !self.attached {
            return Vec::new();
        }
        anchor_scroll(href).into_iter().collect()
    }

    pub fn toggle_theme(&mut self) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(theme) = c.theme.as_mut() {
                theme.toggle(ctx);
            }
        })
    }

    /// Element `index` of the `kind` group crossed its visibility threshold.
    pub fn intersected(&mut self, kind: RevealKind, index: usize) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(group) = c.reveals.iter_mut().find(|g| g.kind() == kind) {
                group.intersected(index, ctx);
            }
        })
    }

    pub fn select_filter(&mut self, index: usize) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(gallery) = c.gallery.as_mut() {
                gallery.select_filter(index, ctx);
            }
        })
    }

    pub fn open_lightbox(&mut self, item: usize) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(gallery) = c.gallery.as_mut() {
                gallery.open(item, ctx);
            }
        })
    }

    pub fn close_lightbox(&mut self) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(gallery) = c.gallery.as_mut() {
                gallery.close(ctx);
            }
        })
    }

    pub fn submit(&mut self, values: &FormValues) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(form) = c.form.as_mut() {
                form.submit(values, ctx);
            }
        })
    }

    pub fn input(&mut self, field: Field, value: &str) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(form) = c.form.as_mut() {
                form.input(field, value, ctx);
            }
        })
    }

    pub fn back_to_top_clicked(&mut self) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(button) = c.back_to_top.as_ref() {
                button.clicked(ctx);
            }
        })
    }

    /// The logo was clicked; `center` is the center of its bounding box.
    pub fn logo_clicked(&mut self, center: Point) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(particles) = c.particles.as_mut() {
                particles.burst(center, ctx);
            }
        })
    }

    pub fn card_moved(&mut self, card: usize, at: CardPointer) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(tilt) = c.tilt.as_ref() {
                tilt.pointer_moved(card, at, ctx);
            }
        })
    }

    pub fn card_left(&mut self, card: usize) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(tilt) = c.tilt.as_ref() {
                tilt.pointer_left(card, ctx);
            }
        })
    }

    pub fn contact_clicked(&mut self, line: usize) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(clipboard) = c.clipboard.as_ref() {
                clipboard.clicked(line, ctx);
            }
        })
    }

    /// The clipboard write for `line` resolved successfully.
    pub fn copied(&mut self, line: usize) -> Vec<Effect> {
        self.with(|c, ctx| {
            if let Some(clipboard) = c.clipboard.as_ref() {
                clipboard.copied(line, ctx);
            }
        })
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Mounted reveal groups, for the host to build one observer each.
    #[must_use]
    pub fn reveal_groups(&self) -> &[RevealGroup] {
        &self.controllers.reveals
    }

    #[must_use]
    pub fn reveal_group(&self, kind: RevealKind) -> Option<&RevealGroup> {
        self.controllers.reveals.iter().find(|g| g.kind() == kind)
    }

    #[must_use]
    pub fn intro(&self) -> Option<&Intro> {
        self.controllers.intro.as_ref()
    }

    #[must_use]
    pub fn nav(&self) -> Option<&Nav> {
        self.controllers.nav.as_ref()
    }

    #[must_use]
    pub fn theme(&self) -> Option<&ThemeToggle> {
        self.controllers.theme.as_ref()
    }

    #[must_use]
    pub fn gallery(&self) -> Option<&Gallery> {
        self.controllers.gallery.as_ref()
    }

    #[must_use]
    pub fn form(&self) -> Option<&ContactForm> {
        self.controllers.form.as_ref()
    }

    #[must_use]
    pub fn particles(&self) -> Option<&Particles> {
        self.controllers.particles.as_ref()
    }

    #[must_use]
    pub fn has_cursor(&self) -> bool {
        self.controllers.cursor.is_some()
    }
}
