//! Snapshot of the document structure the core binds to.
//!
//! The host scans the document once at startup and fills a [`Blueprint`].
//! Lists are in document order; their indices become the indices of the
//! matching [`crate::effect::Target`] variants. Optional groups that were
//! absent (or failed to mount) are `None`/`false`, and the corresponding
//! controller is never constructed.

/// A gallery item: its category key and full image source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryItemSpec {
    pub category: String,
    pub image_src: String,
}

impl GalleryItemSpec {
    #[must_use]
    pub fn new(category: &str, image_src: &str) -> Self {
        Self { category: category.to_owned(), image_src: image_src.to_owned() }
    }
}

/// Gallery filters and items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySpec {
    /// Category key of each filter control (`"all"` for the catch-all).
    pub filters: Vec<String>,
    pub items: Vec<GalleryItemSpec>,
    /// Whether the lightbox overlay and its image slot are present.
    pub lightbox: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blueprint {
    /// Cursor ring and dot are both present.
    pub cursor: bool,
    /// Intro overlay, title, confirmation control, main content, and navbar are present.
    pub intro: bool,
    /// `href` of each navigation link, when the navbar chrome is present.
    pub nav_links: Option<Vec<String>>,
    /// `id` of each top-level section.
    pub sections: Vec<String>,
    /// Theme toggle control is present.
    pub theme_toggle: bool,
    /// Persisted theme value read at startup, if any.
    pub stored_theme: Option<String>,
    /// Number of elements flagged for scroll reveal.
    pub reveal_count: usize,
    /// Raw target percentage of each skill item.
    pub skill_progress: Vec<String>,
    /// Deferred source of each lazy image.
    pub lazy_images: Vec<String>,
    pub gallery: Option<GallerySpec>,
    /// Contact form with its three fields, error slots, and success banner is present.
    pub form: bool,
    pub back_to_top: bool,
    pub parallax_count: usize,
    /// Logo element for the particle burst is present.
    pub logo: bool,
    pub card_count: usize,
    /// Text of every contact line; only lines containing `@` are made copyable.
    pub contact_lines: Vec<String>,
    /// Viewport width at startup, in CSS pixels.
    pub viewport_width: f64,
}
