//! Class names, storage keys, and fixed strings shared across controllers.

// ── State classes ───────────────────────────────────────────────

/// Generic "on" marker for nav links, filters, the mobile menu, and the lightbox.
pub const ACTIVE: &str = "active";

/// Hover marker on the cursor ring.
pub const HOVER: &str = "hover";

/// Intro exit marker and gallery filter-out marker.
pub const HIDDEN: &str = "hidden";

/// Main content and navbar reveal marker once the intro is gone.
pub const VISIBLE: &str = "visible";

/// Page scroll lock on `<body>`.
pub const NO_SCROLL: &str = "no-scroll";

/// One-way reveal marker for reveal elements and skill items.
pub const REVEALED: &str = "revealed";

/// One-way marker on top-level sections.
pub const SECTION_VISIBLE: &str = "section-visible";

/// Marker on lazy images once their real source is set, and on `<body>` after load.
pub const LOADED: &str = "loaded";

/// Field error marker on contact form inputs.
pub const ERROR: &str = "error";

/// Success banner marker.
pub const SHOW: &str = "show";

/// `<body>` marker while the viewport is classified as mobile.
pub const MOBILE_DEVICE: &str = "mobile-device";

// ── Attributes and properties ───────────────────────────────────

/// Document-level theme attribute consumed by the stylesheet.
pub const THEME_ATTR: &str = "data-theme";

/// Custom property driving the skill bar fill transition.
pub const PROGRESS_VAR: &str = "--progress-width";

/// Gallery filter sentinel matching every category.
pub const FILTER_ALL: &str = "all";

// ── Contact form ────────────────────────────────────────────────

pub const NAME_REQUIRED: &str = "Veuillez entrer votre nom";
pub const EMAIL_INVALID: &str = "Veuillez entrer un email valide";
pub const MESSAGE_REQUIRED: &str = "Veuillez entrer votre message";

// ── Clipboard ───────────────────────────────────────────────────

pub const COPY_HINT: &str = "Cliquer pour copier";
pub const COPY_DONE: &str = "✓ Copié!";
pub const COPY_DONE_COLOR: &str = "#10b981";

// ── Particles ───────────────────────────────────────────────────

/// Palette particles pick from at spawn.
pub const PARTICLE_COLORS: [&str; 4] = ["#6366f1", "#8b5cf6", "#ec4899", "#10b981"];

// ── Banner ──────────────────────────────────────────────────────

pub const BANNER_OWNER: &str = "Portfolio de Boubacar Maïga";
pub const BANNER_ROLE: &str = "Artiste 3D/2D & VFX Designer";
