//! Gallery category filtering and the image lightbox.
//!
//! The lightbox remembers the image it shows by source, and arrow keys step
//! through the items that are visible at the time of the key press. If the
//! filter changes while the lightbox is open, the shown image may no longer
//! be among the visible items; stepping then behaves as if the image sat
//! before the first item (right jumps to the first visible item, left does
//! nothing).

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::blueprint::{GalleryItemSpec, GallerySpec};
use crate::consts::{ACTIVE, FILTER_ALL, HIDDEN};
use crate::controller::{Controller, Ctx};
use crate::effect::{Effect, Target};
use crate::scroll_lock::LockHolder;

const ENTRANCE_ANIMATION: &str = "fadeInUp 0.5s ease";

/// Whether an item in `category` is shown under `filter`.
#[must_use]
pub fn matches_filter(filter: &str, category: &str) -> bool {
    filter == FILTER_ALL || filter == category
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lightbox {
    Closed,
    Open { image_src: String },
}

#[derive(Debug, Clone)]
pub struct Gallery {
    filters: Vec<String>,
    items: Vec<GalleryItemSpec>,
    hidden: Vec<bool>,
    active_filter: Option<usize>,
    has_lightbox: bool,
    lightbox: Lightbox,
}

impl Gallery {
    #[must_use]
    pub fn new(spec: GallerySpec) -> Self {
        let hidden = vec![false; spec.items.len()];
        let active_filter = spec.filters.iter().position(|f| f == FILTER_ALL);
        Self {
            filters: spec.filters,
            items: spec.items,
            hidden,
            active_filter,
            has_lightbox: spec.lightbox,
            lightbox: Lightbox::Closed,
        }
    }

    /// The active filter key, `"all"` when none was ever chosen.
    #[must_use]
    pub fn active_filter(&self) -> &str {
        self.active_filter.and_then(|i| self.filters.get(i)).map_or(FILTER_ALL, String::as_str)
    }

    #[must_use]
    pub fn active_filter_index(&self) -> Option<usize> {
        self.active_filter
    }

    #[must_use]
    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.get(index).copied().unwrap_or(true)
    }

    /// Indices of items not hidden by the active filter, in document order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<usize> {
        (0..self.items.len()).filter(|&i| !self.hidden[i]).collect()
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Filter control `index` was activated.
    pub fn select_filter(&mut self, index: usize, ctx: &mut Ctx<'_>) {
        let Some(filter) = self.filters.get(index).cloned() else {
            return;
        };
        self.active_filter = Some(index);
        for i in 0..self.filters.len() {
            ctx.emit(Effect::toggle_class(Target::FilterButton(i), ACTIVE, i == index));
        }
        for (i, item) in self.items.iter().enumerate() {
            let shown = matches_filter(&filter, &item.category);
            self.hidden[i] = !shown;
            if shown {
                ctx.emit(Effect::RemoveClass { target: Target::GalleryItem(i), class: HIDDEN });
                ctx.emit(Effect::style(Target::GalleryItem(i), "animation", ENTRANCE_ANIMATION));
            } else {
                ctx.emit(Effect::AddClass { target: Target::GalleryItem(i), class: HIDDEN });
            }
        }
    }

    /// The view action on item `index` was clicked.
    pub fn open(&mut self, index: usize, ctx: &mut Ctx<'_>) {
        if !self.has_lightbox {
            return;
        }
        let Some(item) = self.items.get(index) else {
            return;
        };
        let image_src = item.image_src.clone();
        ctx.emit(Effect::SetAttribute { target: Target::LightboxImage, name: "src", value: image_src.clone() });
        ctx.emit(Effect::AddClass { target: Target::Lightbox, class: ACTIVE });
        ctx.lock_scroll(LockHolder::Lightbox);
        self.lightbox = Lightbox::Open { image_src };
    }

    /// Close control, backdrop click, or Escape.
    ///
    /// Always clears the overlay marker; only releases the scroll lock this
    /// lightbox actually holds.
    pub fn close(&mut self, ctx: &mut Ctx<'_>) {
        if !self.has_lightbox {
            return;
        }
        self.lightbox = Lightbox::Closed;
        ctx.emit(Effect::RemoveClass { target: Target::Lightbox, class: ACTIVE });
        ctx.unlock_scroll(LockHolder::Lightbox);
    }

    fn step(&mut self, forward: bool, ctx: &mut Ctx<'_>) {
        let Lightbox::Open { image_src } = &self.lightbox else {
            return;
        };
        let visible = self.visible_items();
        let current = visible.iter().position(|&i| self.items[i].image_src == *image_src);
        let next = match (current, forward) {
            (Some(pos), true) if pos + 1 < visible.len() => visible[pos + 1],
            (None, true) if !visible.is_empty() => visible[0],
            (Some(pos), false) if pos > 0 => visible[pos - 1],
            _ => return,
        };
        let image_src = self.items[next].image_src.clone();
        ctx.emit(Effect::SetAttribute { target: Target::LightboxImage, name: "src", value: image_src.clone() });
        self.lightbox = Lightbox::Open { image_src };
    }
}

impl Controller for Gallery {
    fn name(&self) -> &'static str {
        "gallery"
    }

    fn attach(&mut self, ctx: &mut Ctx<'_>) {
        if let Some(active) = self.active_filter {
            for i in 0..self.filters.len() {
                ctx.emit(Effect::toggle_class(Target::FilterButton(i), ACTIVE, i == active));
            }
        }
    }

    fn detach(&mut self, ctx: &mut Ctx<'_>) {
        if matches!(self.lightbox, Lightbox::Open { .. }) {
            self.close(ctx);
        }
    }

    fn on_key(&mut self, key: &str, ctx: &mut Ctx<'_>) {
        match key {
            "Escape" => self.close(ctx),
            "ArrowRight" => self.step(true, ctx),
            "ArrowLeft" => self.step(false, ctx),
            _ => {}
        }
    }
}
