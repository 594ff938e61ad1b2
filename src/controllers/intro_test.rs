use super::*;
use crate::consts::NO_SCROLL;
use crate::harness::Rig;

fn intro(title: &str) -> Intro {
    Intro::new(IntroConfig { title: title.to_owned(), ..IntroConfig::default() })
}

#[test]
fn attach_locks_scroll_and_waits_start_delay() {
    let mut intro = intro("Hi");
    let mut rig = Rig::new();
    let fx = rig.run(|ctx| intro.attach(ctx));
    assert_eq!(
        fx,
        vec![
            Effect::AddClass { target: Target::Body, class: NO_SCROLL },
            Effect::StartTimer { key: TimerKey::IntroType, delay_ms: 800 },
        ]
    );
    assert!(rig.lock.is_held_by(LockHolder::Intro));
    assert_eq!(intro.phase(), IntroPhase::Idle);
}

#[test]
fn typing_reveals_one_character_per_tick() {
    let mut intro = intro("Abc");
    let mut rig = Rig::new();
    rig.run(|ctx| intro.attach(ctx));

    let fx = rig.run(|ctx| intro.on_timer(TimerKey::IntroType, ctx));
    assert_eq!(
        fx,
        vec![
            Effect::SetText { target: Target::IntroTitle, text: "A".to_owned() },
            Effect::StartTimer { key: TimerKey::IntroType, delay_ms: 100 },
        ]
    );
    assert_eq!(intro.phase(), IntroPhase::Typing { typed: 1 });

    rig.run(|ctx| intro.on_timer(TimerKey::IntroType, ctx));
    let fx = rig.run(|ctx| intro.on_timer(TimerKey::IntroType, ctx));
    assert_eq!(fx, vec![Effect::SetText { target: Target::IntroTitle, text: "Abc".to_owned() }]);
    assert_eq!(intro.phase(), IntroPhase::Ready);
}

#[test]
fn typing_handles_multibyte_characters() {
    let mut intro = intro("é&");
    let mut rig = Rig::new();
    let fx = rig.run(|ctx| intro.on_timer(TimerKey::IntroType, ctx));
    assert_eq!(fx[0], Effect::SetText { target: Target::IntroTitle, text: "é".to_owned() });
}

#[test]
fn empty_title_goes_straight_to_ready() {
    let mut intro = intro("");
    let mut rig = Rig::new();
    let fx = rig.run(|ctx| intro.on_timer(TimerKey::IntroType, ctx));
    assert!(fx.is_empty());
    assert_eq!(intro.phase(), IntroPhase::Ready);
}

#[test]
fn confirm_flips_class_then_hides_after_grace() {
    let mut intro = intro("Hi");
    let mut rig = Rig::new();
    rig.run(|ctx| intro.attach(ctx));

    let fx = rig.run(|ctx| intro.confirm(ctx));
    assert_eq!(
        fx,
        vec![
            Effect::AddClass { target: Target::Intro, class: HIDDEN },
            Effect::StartTimer { key: TimerKey::IntroExit, delay_ms: 800 },
        ]
    );
    assert_eq!(intro.phase(), IntroPhase::Exiting);
    assert!(rig.lock.is_locked());

    let fx = rig.run(|ctx| intro.on_timer(TimerKey::IntroExit, ctx));
    assert!(fx.contains(&Effect::style(Target::Intro, "display", "none")));
    assert!(fx.contains(&Effect::AddClass { target: Target::MainContent, class: VISIBLE }));
    assert!(fx.contains(&Effect::AddClass { target: Target::Navbar, class: VISIBLE }));
    assert!(fx.contains(&Effect::RemoveClass { target: Target::Body, class: NO_SCROLL }));
    assert_eq!(intro.phase(), IntroPhase::Hidden);
    assert!(!rig.lock.is_locked());
}

#[test]
fn second_confirm_is_ignored() {
    let mut intro = intro("Hi");
    let mut rig = Rig::new();
    rig.run(|ctx| intro.confirm(ctx));
    let fx = rig.run(|ctx| intro.confirm(ctx));
    assert!(fx.is_empty());
}

#[test]
fn typing_stops_after_confirm() {
    let mut intro = intro("Hello");
    let mut rig = Rig::new();
    rig.run(|ctx| intro.on_timer(TimerKey::IntroType, ctx));
    rig.run(|ctx| intro.confirm(ctx));
    let fx = rig.run(|ctx| intro.on_timer(TimerKey::IntroType, ctx));
    assert!(fx.is_empty());
    assert_eq!(intro.phase(), IntroPhase::Exiting);
}

#[test]
fn stray_exit_timer_before_confirm_is_ignored() {
    let mut intro = intro("Hi");
    let mut rig = Rig::new();
    let fx = rig.run(|ctx| intro.on_timer(TimerKey::IntroExit, ctx));
    assert!(fx.is_empty());
    assert_eq!(intro.phase(), IntroPhase::Idle);
}

#[test]
fn exit_keeps_page_locked_while_lightbox_holds_it() {
    let mut intro = intro("Hi");
    let mut rig = Rig::new();
    rig.run(|ctx| intro.attach(ctx));
    rig.run(|ctx| ctx.lock_scroll(LockHolder::Lightbox));
    rig.run(|ctx| intro.confirm(ctx));
    let fx = rig.run(|ctx| intro.on_timer(TimerKey::IntroExit, ctx));
    assert!(!fx.contains(&Effect::RemoveClass { target: Target::Body, class: NO_SCROLL }));
    assert!(rig.lock.is_held_by(LockHolder::Lightbox));
}
