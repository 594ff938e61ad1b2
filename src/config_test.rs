#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_site_timings() {
    let config = Config::default();
    assert_eq!(config.intro.start_delay_ms, 800);
    assert_eq!(config.intro.char_interval_ms, 100);
    assert_eq!(config.intro.exit_grace_ms, 800);
    assert_eq!(config.theme.swap_delay_ms, 250);
    assert_eq!(config.theme.restore_delay_ms, 100);
    assert_eq!(config.form.send_delay_ms, 1500);
    assert_eq!(config.form.success_visible_ms, 5000);
    assert_eq!(config.nav.settle_ms, 10);
    assert_eq!(config.viewport.resize_settle_ms, 250);
}

#[test]
fn defaults_match_observer_thresholds() {
    let reveal = RevealConfig::default();
    assert_eq!(reveal.reveal.threshold, 0.1);
    assert_eq!(reveal.reveal.root_margin, "0px 0px -50px 0px");
    assert_eq!(reveal.skills.threshold, 0.5);
    assert_eq!(reveal.sections.threshold, 0.15);
}

#[test]
fn site_default_preloads_profile_image() {
    let config = Config::site_default();
    assert_eq!(config.preload_images, vec!["assets/profile.jpg".to_owned()]);
}

#[test]
fn empty_object_parses_to_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::site_default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = Config::from_json(r#"{"intro":{"title":"Hello"},"form":{"sendDelayMs":10}}"#).unwrap();
    assert_eq!(config.intro.title, "Hello");
    assert_eq!(config.intro.char_interval_ms, 100);
    assert_eq!(config.form.send_delay_ms, 10);
    assert_eq!(config.form.success_visible_ms, 5000);
    assert_eq!(config.cursor, CursorConfig::default());
}

#[test]
fn nested_observer_override_uses_camel_case() {
    let config = Config::from_json(r#"{"reveal":{"skills":{"threshold":0.25,"rootMargin":"10px"}}}"#).unwrap();
    assert_eq!(config.reveal.skills, ObserverConfig::new(0.25, "10px"));
    assert_eq!(config.reveal.reveal.threshold, 0.1);
}

#[test]
fn explicit_preload_list_is_kept() {
    let config = Config::from_json(r#"{"preloadImages":["a.png","b.png"]}"#).unwrap();
    assert_eq!(config.preload_images, vec!["a.png".to_owned(), "b.png".to_owned()]);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Config::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("config parse failed"));
}

#[test]
fn explicit_empty_preload_list_disables_preloading() {
    let config = Config::from_json(r#"{"preloadImages":[]}"#).unwrap();
    assert!(config.preload_images.is_empty());
}

#[test]
fn non_positive_fade_falls_back_to_default() {
    for fade in ["0", "-0.5"] {
        let config = Config::from_json(&format!(r#"{{"particles":{{"fade":{fade},"count":5}}}}"#)).unwrap();
        assert_eq!(config.particles.fade, ParticleConfig::default().fade, "fade {fade}");
        assert_eq!(config.particles.count, 5);
    }
}

#[test]
fn positive_fade_is_kept() {
    let config = Config::from_json(r#"{"particles":{"fade":0.1}}"#).unwrap();
    assert_eq!(config.particles.fade, 0.1);
}
