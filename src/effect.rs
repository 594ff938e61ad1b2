//! Effects returned by controllers for the host to apply.
//!
//! The core never touches the document. Every mutation is described as an
//! [`Effect`] against a [`Target`], and the host applies effects in the order
//! they were emitted. Indexed targets refer to positions in the matching
//! [`crate::blueprint::Blueprint`] list, in document order.

use crate::controllers::form::Field;
use crate::timer::TimerKey;

/// An element the core may address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The `<html>` element.
    Html,
    /// The `<body>` element.
    Body,
    /// Lagging outer cursor ring.
    Cursor,
    /// Inner cursor dot.
    CursorDot,
    /// Intro overlay.
    Intro,
    /// Intro title slot receiving the typed text.
    IntroTitle,
    /// Main content wrapper revealed after the intro.
    MainContent,
    /// Top navigation bar.
    Navbar,
    /// Mobile menu toggle control.
    MobileToggle,
    /// Mobile menu panel.
    NavMenu,
    /// Navigation link by index.
    NavLink(usize),
    /// Top-level section by index.
    Section(usize),
    /// Any element by id, for generic in-page anchors.
    ElementId(String),
    /// Element flagged for scroll reveal, by index.
    RevealItem(usize),
    /// Skill item by index.
    SkillItem(usize),
    /// Progress bar inside a skill item.
    SkillBar(usize),
    /// Lazily loaded image by index.
    LazyImage(usize),
    /// Gallery filter control by index.
    FilterButton(usize),
    /// Gallery item by index.
    GalleryItem(usize),
    /// Lightbox overlay.
    Lightbox,
    /// Image slot inside the lightbox.
    LightboxImage,
    /// Contact form.
    Form,
    /// Contact form input.
    Field(Field),
    /// Error slot next to a contact form input.
    FieldError(Field),
    /// Success banner under the contact form.
    FormSuccess,
    /// Back-to-top button.
    BackToTop,
    /// Parallax image by index.
    Parallax(usize),
    /// Tilt card by index.
    Card(usize),
    /// Copyable contact line by index.
    ContactLine(usize),
    /// Transient particle by id.
    Particle(u32),
}

/// A single document mutation or host request.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    /// Set an inline style property. Accepts custom properties (`--name`).
    SetStyle { target: Target, property: &'static str, value: String },
    SetAttribute { target: Target, name: &'static str, value: String },
    SetText { target: Target, text: String },
    /// Clear every field of the contact form.
    ResetForm,
    /// Smooth-scroll so the target's top aligns with the viewport top.
    ScrollIntoView { target: Target },
    /// Smooth-scroll the window back to offset zero.
    ScrollToTop,
    /// Write a durable key/value pair.
    Store { key: String, value: String },
    /// Write text to the system clipboard; the host reports success back
    /// through [`crate::page::Page::copied`].
    CopyToClipboard { line: usize, text: String },
    /// Arm a one-shot timer; the host calls [`crate::page::Page::on_timer`] when it fires.
    StartTimer { key: TimerKey, delay_ms: u32 },
    /// Stop observing a fire-once visibility target.
    Unobserve { target: Target },
    /// Create a fixed-position particle centered on `(x, y)`.
    SpawnParticle { id: u32, x: f64, y: f64, color: &'static str },
    /// Detach an element created by the core.
    Remove { target: Target },
}

impl Effect {
    /// Add `class` when `on`, remove it otherwise.
    #[must_use]
    pub fn toggle_class(target: Target, class: &'static str, on: bool) -> Self {
        if on { Self::AddClass { target, class } } else { Self::RemoveClass { target, class } }
    }

    #[must_use]
    pub fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }
}
