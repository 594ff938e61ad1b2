use super::*;

#[test]
fn trigger_returns_increasing_generations() {
    let mut debounce = Debounce::new();
    let first = debounce.trigger();
    let second = debounce.trigger();
    assert!(second > first);
}

#[test]
fn only_last_trigger_is_current() {
    let mut debounce = Debounce::new();
    let a = debounce.trigger();
    let b = debounce.trigger();
    let c = debounce.trigger();
    assert!(!debounce.is_current(a));
    assert!(!debounce.is_current(b));
    assert!(debounce.is_current(c));
}

#[test]
fn untriggered_debounce_rejects_any_generation() {
    let debounce = Debounce::new();
    assert!(!debounce.is_current(1));
}
