//! Tunable timings and thresholds.
//!
//! Every field has a default matching the site's stylesheet transitions, so an
//! absent or partial configuration block still yields a complete [`Config`].
//! The host may supply overrides as JSON in a
//! `<script type="application/json" id="folio-config">` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the optional inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub intro: IntroConfig,
    pub cursor: CursorConfig,
    pub nav: NavConfig,
    pub theme: ThemeConfig,
    pub reveal: RevealConfig,
    pub form: FormConfig,
    pub decor: DecorConfig,
    pub particles: ParticleConfig,
    pub viewport: ViewportConfig,
    /// Image URLs fetched ahead of first paint. An explicit empty list
    /// turns preloading off.
    #[serde(default = "default_preload_images")]
    pub preload_images: Vec<String>,
}

impl Config {
    /// Parse a JSON override block, filling every absent field with its default.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.particles = config.particles.validated();
        Ok(config)
    }

    /// Defaults plus the stock preload list.
    #[must_use]
    pub fn site_default() -> Self {
        Self { preload_images: default_preload_images(), ..Self::default() }
    }
}

fn default_preload_images() -> Vec<String> {
    vec!["assets/profile.jpg".to_owned()]
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntroConfig {
    /// Text typed into the intro title.
    pub title: String,
    /// Delay before the first character.
    pub start_delay_ms: u32,
    /// Delay between characters.
    pub char_interval_ms: u32,
    /// Time between the exit class flip and the structural hide.
    pub exit_grace_ms: u32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            title: "Artiste 3D/2D & VFX".to_owned(),
            start_delay_ms: 800,
            char_interval_ms: 100,
            exit_grace_ms: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CursorConfig {
    /// Fraction of the remaining distance the ring covers per frame.
    pub ring_smoothing: f64,
    /// Fraction of the remaining distance the dot covers per frame.
    pub dot_smoothing: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self { ring_smoothing: 0.1, dot_smoothing: 0.15 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    /// A section becomes current once the scroll offset is within this many
    /// pixels above its top.
    pub active_offset_px: f64,
    /// The navbar only hides when scrolling down past this offset.
    pub hide_threshold_px: f64,
    /// Debounce window for the auto-hide listener.
    pub settle_ms: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { active_offset_px: 200.0, hide_threshold_px: 100.0, settle_ms: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Durable storage key for the preference.
    pub storage_key: String,
    /// Transition hint applied to `<body>` when toggling.
    pub transition: String,
    /// Scale applied to `<body>` while the palette swaps.
    pub shrink_scale: f64,
    /// Delay from toggle to palette swap.
    pub swap_delay_ms: u32,
    /// Delay from palette swap to scale restore.
    pub restore_delay_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            transition: "background-color 0.5s ease, transform 0.5s ease".to_owned(),
            shrink_scale: 0.98,
            swap_delay_ms: 250,
            restore_delay_ms: 100,
        }
    }
}

/// Intersection options for one observer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserverConfig {
    #[must_use]
    pub fn new(threshold: f64, root_margin: &str) -> Self {
        Self { threshold, root_margin: root_margin.to_owned() }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self::new(0.0, "0px")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub reveal: ObserverConfig,
    pub skills: ObserverConfig,
    pub sections: ObserverConfig,
    pub lazy_images: ObserverConfig,
    /// Delay after window load before the stagger is scheduled.
    pub stagger_delay_ms: u32,
    /// Second delay before the stagger is written.
    pub stagger_apply_ms: u32,
    /// Transition delay added per reveal element, in seconds.
    pub stagger_step_s: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            reveal: ObserverConfig::new(0.1, "0px 0px -50px 0px"),
            skills: ObserverConfig::new(0.5, "0px"),
            sections: ObserverConfig::new(0.15, "0px"),
            lazy_images: ObserverConfig::new(0.0, "0px"),
            stagger_delay_ms: 500,
            stagger_apply_ms: 100,
            stagger_step_s: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Simulated network delay for a valid submission.
    pub send_delay_ms: u32,
    /// How long the success banner stays up.
    pub success_visible_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { send_delay_ms: 1500, success_visible_ms: 5000 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecorConfig {
    /// Scroll offset past which the back-to-top button shows.
    pub back_to_top_px: f64,
    /// Parallax translation per pixel scrolled.
    pub parallax_speed: f64,
    /// Pixels of pointer offset per degree of card rotation.
    pub tilt_divisor: f64,
    /// Scale applied to a tilted card.
    pub tilt_scale: f64,
    /// How long a contact line shows its copy confirmation.
    pub copy_feedback_ms: u32,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            back_to_top_px: 500.0,
            parallax_speed: 0.5,
            tilt_divisor: 10.0,
            tilt_scale: 1.05,
            copy_feedback_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    pub count: u32,
    pub min_speed: f64,
    /// Random speed added on top of `min_speed`, drawn from `[0, speed_spread)`.
    pub speed_spread: f64,
    /// Velocity-to-displacement factor per tick.
    pub step: f64,
    /// Downward displacement added per tick.
    pub gravity: f64,
    /// Opacity lost per tick.
    pub fade: f64,
}

impl ParticleConfig {
    /// Replace a non-positive (or NaN) fade with the default so every burst
    /// still dies out.
    #[must_use]
    pub fn validated(self) -> Self {
        if self.fade > 0.0 {
            return self;
        }
        let fade = Self::default().fade;
        log::warn!("particles.fade {} must be positive; using {fade}", self.fade);
        Self { fade, ..self }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self { count: 20, min_speed: 100.0, speed_spread: 100.0, step: 0.01, gravity: 2.0, fade: 0.02 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportConfig {
    /// Widest viewport still classified as mobile.
    pub mobile_max_px: f64,
    /// Widest viewport still classified as tablet.
    pub tablet_max_px: f64,
    /// Debounce window for resize handling.
    pub resize_settle_ms: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { mobile_max_px: 768.0, tablet_max_px: 1024.0, resize_settle_ms: 250 }
    }
}
