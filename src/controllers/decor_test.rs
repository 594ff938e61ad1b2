use super::*;
use crate::harness::Rig;
use crate::util::viewport::ViewportClass;

#[test]
fn back_to_top_shows_past_threshold_once() {
    let mut button = BackToTop::new(&DecorConfig::default());
    let mut rig = Rig::new();

    rig.scroll_y = 400.0;
    assert!(rig.run(|ctx| button.on_scroll(ctx)).is_empty());

    rig.scroll_y = 501.0;
    let fx = rig.run(|ctx| button.on_scroll(ctx));
    assert_eq!(fx, vec![Effect::AddClass { target: Target::BackToTop, class: VISIBLE }]);
    assert!(button.is_shown());

    rig.scroll_y = 900.0;
    assert!(rig.run(|ctx| button.on_scroll(ctx)).is_empty());

    rig.scroll_y = 500.0;
    let fx = rig.run(|ctx| button.on_scroll(ctx));
    assert_eq!(fx, vec![Effect::RemoveClass { target: Target::BackToTop, class: VISIBLE }]);
}

#[test]
fn back_to_top_click_scrolls_to_top() {
    let button = BackToTop::new(&DecorConfig::default());
    let mut rig = Rig::new();
    assert_eq!(rig.run(|ctx| button.clicked(ctx)), vec![Effect::ScrollToTop]);
}

#[test]
fn parallax_translates_every_layer() {
    let mut parallax = Parallax::new(2, &DecorConfig::default());
    let mut rig = Rig::new();
    rig.scroll_y = 300.0;
    let fx = rig.run(|ctx| parallax.on_scroll(ctx));
    assert_eq!(
        fx,
        vec![
            Effect::style(Target::Parallax(0), "transform", "translateY(150px)"),
            Effect::style(Target::Parallax(1), "transform", "translateY(150px)"),
        ]
    );
}

#[test]
fn tilt_transform_follows_pointer_offset() {
    let at = CardPointer { x: 50.0, y: 150.0, width: 200.0, height: 100.0 };
    assert_eq!(
        tilt_transform(at, &DecorConfig::default()),
        "perspective(1000px) rotateX(10deg) rotateY(5deg) scale3d(1.05, 1.05, 1.05)"
    );
}

#[test]
fn tilt_centered_pointer_has_no_rotation() {
    let at = CardPointer { x: 100.0, y: 50.0, width: 200.0, height: 100.0 };
    assert_eq!(
        tilt_transform(at, &DecorConfig::default()),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1.05, 1.05, 1.05)"
    );
}

#[test]
fn tilt_resets_on_leave() {
    let tilt = Tilt::new(1, DecorConfig::default());
    let mut rig = Rig::new();
    let fx = rig.run(|ctx| tilt.pointer_left(0, ctx));
    assert_eq!(fx, vec![Effect::style(Target::Card(0), "transform", TILT_REST)]);
}

#[test]
fn tilt_is_inert_on_mobile() {
    let tilt = Tilt::new(1, DecorConfig::default());
    let mut rig = Rig::new();
    rig.viewport = ViewportClass::Mobile;
    let at = CardPointer { x: 0.0, y: 0.0, width: 100.0, height: 100.0 };
    assert!(rig.run(|ctx| tilt.pointer_moved(0, at, ctx)).is_empty());
    assert!(rig.run(|ctx| tilt.pointer_left(0, ctx)).is_empty());
}

#[test]
fn tilt_ignores_unknown_card() {
    let tilt = Tilt::new(1, DecorConfig::default());
    let mut rig = Rig::new();
    let at = CardPointer { x: 0.0, y: 0.0, width: 100.0, height: 100.0 };
    assert!(rig.run(|ctx| tilt.pointer_moved(3, at, ctx)).is_empty());
}

#[test]
fn switching_to_mobile_flattens_cards() {
    let mut tilt = Tilt::new(2, DecorConfig::default());
    let mut rig = Rig::new();
    rig.viewport = ViewportClass::Mobile;
    let fx = rig.run(|ctx| tilt.on_viewport(ctx));
    assert_eq!(fx.len(), 2);
}

fn lines() -> ClipboardLines {
    ClipboardLines::new(
        vec!["  contact@example.com ".to_owned(), "+223 00 00 00 00".to_owned()],
        &DecorConfig::default(),
    )
}

#[test]
fn only_email_lines_are_copyable() {
    let mut lines = lines();
    assert!(lines.is_copyable(0));
    assert!(!lines.is_copyable(1));

    let mut rig = Rig::new();
    let fx = rig.run(|ctx| lines.attach(ctx));
    assert_eq!(
        fx,
        vec![
            Effect::style(Target::ContactLine(0), "cursor", "pointer"),
            Effect::SetAttribute { target: Target::ContactLine(0), name: "title", value: COPY_HINT.to_owned() },
        ]
    );
}

#[test]
fn click_copies_trimmed_text() {
    let lines = lines();
    let mut rig = Rig::new();
    assert_eq!(
        rig.run(|ctx| lines.clicked(0, ctx)),
        vec![Effect::CopyToClipboard { line: 0, text: "contact@example.com".to_owned() }]
    );
    assert!(rig.run(|ctx| lines.clicked(1, ctx)).is_empty());
}

#[test]
fn copy_confirmation_reverts_after_feedback_window() {
    let mut lines = lines();
    let mut rig = Rig::new();
    let fx = rig.run(|ctx| lines.copied(0, ctx));
    assert_eq!(
        fx,
        vec![
            Effect::SetText { target: Target::ContactLine(0), text: COPY_DONE.to_owned() },
            Effect::style(Target::ContactLine(0), "color", COPY_DONE_COLOR),
            Effect::StartTimer { key: TimerKey::CopyRevert(0), delay_ms: 2000 },
        ]
    );

    let fx = rig.run(|ctx| lines.on_timer(TimerKey::CopyRevert(0), ctx));
    assert_eq!(
        fx,
        vec![
            Effect::SetText { target: Target::ContactLine(0), text: "  contact@example.com ".to_owned() },
            Effect::style(Target::ContactLine(0), "color", ""),
        ]
    );
}
