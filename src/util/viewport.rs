//! Viewport width classification.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::config::ViewportConfig;

/// Coarse device class derived from the viewport width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classify `width` (CSS pixels) against the configured breakpoints.
    ///
    /// Mobile is `width <= mobile_max`, tablet is `mobile_max < width <= tablet_max`.
    #[must_use]
    pub fn classify(width: f64, config: &ViewportConfig) -> Self {
        if width <= config.mobile_max_px {
            Self::Mobile
        } else if width <= config.tablet_max_px {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    #[must_use]
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }

    #[must_use]
    pub fn is_tablet(self) -> bool {
        self == Self::Tablet
    }
}
