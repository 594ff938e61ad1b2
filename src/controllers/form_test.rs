use super::*;
use crate::harness::Rig;

fn error_text(fx: &[Effect], field: Field) -> Option<&str> {
    fx.iter().rev().find_map(|e| match e {
        Effect::SetText { target: Target::FieldError(f), text } if *f == field => Some(text.as_str()),
        _ => None,
    })
}

fn started_timers(fx: &[Effect]) -> Vec<TimerKey> {
    fx.iter()
        .filter_map(|e| match e {
            Effect::StartTimer { key, .. } => Some(*key),
            _ => None,
        })
        .collect()
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_accepts_plain_addresses() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@mail.example.org"));
    assert!(is_valid_email("x@b..c"));
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("ada"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ada@"));
    assert!(!is_valid_email("ada@example"));
    assert!(!is_valid_email("ada@.com"));
    assert!(!is_valid_email("ada@example."));
    assert!(!is_valid_email("ada@ex@ample.com"));
    assert!(!is_valid_email("ada lovelace@example.com"));
    assert!(!is_valid_email(" ada@example.com"));
}

#[test]
fn email_rejects_byte_order_mark_and_unicode_spaces() {
    assert!(!is_valid_email("a@b.c\u{FEFF}"));
    assert!(!is_valid_email("\u{FEFF}a@b.c"));
    assert!(!is_valid_email("a\u{00A0}b@c.d"));
    assert!(!is_valid_email("a@b\u{3000}.c"));
}

#[test]
fn byte_order_mark_alone_counts_as_empty() {
    let failures = validate(&FormValues::new("\u{FEFF}", "ada@example.com", "\u{FEFF} "));
    assert_eq!(failures, vec![(Field::Name, NAME_REQUIRED), (Field::Message, MESSAGE_REQUIRED)]);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_collects_every_failure() {
    let failures = validate(&FormValues::new("  ", "nope", "\n"));
    assert_eq!(
        failures,
        vec![(Field::Name, NAME_REQUIRED), (Field::Email, EMAIL_INVALID), (Field::Message, MESSAGE_REQUIRED)]
    );
}

#[test]
fn validate_passes_complete_values() {
    assert!(validate(&FormValues::new("Ada", "ada@example.com", "Hello")).is_empty());
}

#[test]
fn invalid_submit_shows_all_errors_and_starts_no_timer() {
    let mut form = ContactForm::new(FormConfig::default());
    let mut rig = Rig::new();
    let fx = rig.run(|ctx| form.submit(&FormValues::new("", "bad", ""), ctx));
    assert_eq!(error_text(&fx, Field::Name), Some("Veuillez entrer votre nom"));
    assert_eq!(error_text(&fx, Field::Email), Some("Veuillez entrer un email valide"));
    assert_eq!(error_text(&fx, Field::Message), Some("Veuillez entrer votre message"));
    assert!(Field::ALL.iter().all(|&f| form.has_error(f)));
    assert!(started_timers(&fx).is_empty());
    assert_eq!(form.phase(), FormPhase::Editing);
}

#[test]
fn resubmit_clears_fixed_fields() {
    let mut form = ContactForm::new(FormConfig::default());
    let mut rig = Rig::new();
    rig.run(|ctx| form.submit(&FormValues::new("", "bad", ""), ctx));
    let fx = rig.run(|ctx| form.submit(&FormValues::new("Ada", "bad", "Hi"), ctx));
    assert!(!form.has_error(Field::Name));
    assert!(form.has_error(Field::Email));
    assert_eq!(error_text(&fx, Field::Name), Some(""));
}

#[test]
fn typing_into_errored_field_clears_its_error() {
    let mut form = ContactForm::new(FormConfig::default());
    let mut rig = Rig::new();
    rig.run(|ctx| form.submit(&FormValues::new("", "ada@example.com", "Hi"), ctx));
    assert!(form.has_error(Field::Name));

    let fx = rig.run(|ctx| form.input(Field::Name, "   ", ctx));
    assert!(fx.is_empty());
    assert!(form.has_error(Field::Name));

    let fx = rig.run(|ctx| form.input(Field::Name, "A", ctx));
    assert!(fx.contains(&Effect::RemoveClass { target: Target::Field(Field::Name), class: ERROR }));
    assert!(!form.has_error(Field::Name));
}

#[test]
fn typing_into_clean_field_emits_nothing() {
    let mut form = ContactForm::new(FormConfig::default());
    let mut rig = Rig::new();
    assert!(rig.run(|ctx| form.input(Field::Message, "Hello", ctx)).is_empty());
}

// =============================================================
// Simulated submission
// =============================================================

#[test]
fn valid_submit_dims_form_and_waits() {
    let mut form = ContactForm::new(FormConfig::default());
    let mut rig = Rig::new();
    let fx = rig.run(|ctx| form.submit(&FormValues::new("Ada", "ada@example.com", "Hello"), ctx));
    assert!(fx.contains(&Effect::style(Target::Form, "opacity", "0.5")));
    assert!(fx.contains(&Effect::style(Target::Form, "pointer-events", "none")));
    assert!(fx.contains(&Effect::StartTimer { key: TimerKey::FormSent, delay_ms: 1500 }));
    assert_eq!(form.phase(), FormPhase::Sending);
}

#[test]
fn submit_while_sending_is_ignored() {
    let mut form = ContactForm::new(FormConfig::default());
    let mut rig = Rig::new();
    let values = FormValues::new("Ada", "ada@example.com", "Hello");
    rig.run(|ctx| form.submit(&values, ctx));
    assert!(rig.run(|ctx| form.submit(&values, ctx)).is_empty());
}

#[test]
fn sent_resets_and_shows_banner_then_hides_it() {
    let mut form = ContactForm::new(FormConfig::default());
    let mut rig = Rig::new();
    rig.run(|ctx| form.submit(&FormValues::new("Ada", "ada@example.com", "Hello"), ctx));

    let fx = rig.run(|ctx| form.on_timer(TimerKey::FormSent, ctx));
    assert_eq!(fx[0], Effect::ResetForm);
    assert!(fx.contains(&Effect::style(Target::Form, "opacity", "1")));
    assert!(fx.contains(&Effect::style(Target::Form, "pointer-events", "all")));
    assert!(fx.contains(&Effect::AddClass { target: Target::FormSuccess, class: SHOW }));
    assert_eq!(started_timers(&fx), vec![TimerKey::SuccessHide]);
    assert!(form.is_banner_visible());
    assert_eq!(form.phase(), FormPhase::Editing);

    let fx = rig.run(|ctx| form.on_timer(TimerKey::SuccessHide, ctx));
    assert_eq!(fx, vec![Effect::RemoveClass { target: Target::FormSuccess, class: SHOW }]);
    assert!(!form.is_banner_visible());
}
