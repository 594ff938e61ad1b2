use super::*;

fn classify(width: f64) -> ViewportClass {
    ViewportClass::classify(width, &ViewportConfig::default())
}

#[test]
fn breakpoint_is_inclusive_for_mobile() {
    assert_eq!(classify(320.0), ViewportClass::Mobile);
    assert_eq!(classify(768.0), ViewportClass::Mobile);
}

#[test]
fn tablet_range_excludes_mobile_breakpoint() {
    assert_eq!(classify(768.5), ViewportClass::Tablet);
    assert_eq!(classify(1024.0), ViewportClass::Tablet);
}

#[test]
fn wide_viewport_is_desktop() {
    assert_eq!(classify(1025.0), ViewportClass::Desktop);
    assert_eq!(classify(1920.0), ViewportClass::Desktop);
}

#[test]
fn predicates_match_classes() {
    assert!(ViewportClass::Mobile.is_mobile());
    assert!(!ViewportClass::Tablet.is_mobile());
    assert!(ViewportClass::Tablet.is_tablet());
    assert!(!ViewportClass::Desktop.is_tablet());
}

#[test]
fn custom_breakpoints_apply() {
    let config = ViewportConfig { mobile_max_px: 500.0, tablet_max_px: 900.0, resize_settle_ms: 0 };
    assert_eq!(ViewportClass::classify(600.0, &config), ViewportClass::Tablet);
    assert_eq!(ViewportClass::classify(950.0, &config), ViewportClass::Desktop);
}
