//! Contact form: synchronous validation and a simulated submission.
//!
//! Every field is checked on submit and every failure is shown at once.
//! A valid submission dims the form, waits out a fixed delay standing in for
//! the network, clears the fields, and shows the success banner for a while.
//! No request is ever sent.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::config::FormConfig;
use crate::consts::{EMAIL_INVALID, ERROR, MESSAGE_REQUIRED, NAME_REQUIRED, SHOW};
use crate::controller::{Controller, Ctx};
use crate::effect::{Effect, Target};
use crate::timer::TimerKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Element id of the input.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }
}

/// Raw field contents at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
    }
}

/// Whitespace as browsers' `\s` sees it: Unicode whitespace plus the byte
/// order mark, minus NEL.
fn is_blank(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn is_blank_text(raw: &str) -> bool {
    raw.chars().all(is_blank)
}

/// `local@domain.tld` shape: no whitespace, exactly one `@` with text on both
/// sides, and a dot in the domain with text on both sides.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(is_blank) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Every failing field with its message, in field order.
#[must_use]
pub fn validate(values: &FormValues) -> Vec<(Field, &'static str)> {
    let mut failures = Vec::new();
    if is_blank_text(&values.name) {
        failures.push((Field::Name, NAME_REQUIRED));
    }
    if !is_valid_email(&values.email) {
        failures.push((Field::Email, EMAIL_INVALID));
    }
    if is_blank_text(&values.message) {
        failures.push((Field::Message, MESSAGE_REQUIRED));
    }
    failures
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Dimmed and inert while the simulated request is in flight.
    Sending,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    config: FormConfig,
    errored: [bool; 3],
    phase: FormPhase,
    banner_visible: bool,
}

impl ContactForm {
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self { config, errored: [false; 3], phase: FormPhase::Editing, banner_visible: false }
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn has_error(&self, field: Field) -> bool {
        self.errored[field.slot()]
    }

    #[must_use]
    pub fn is_banner_visible(&self) -> bool {
        self.banner_visible
    }

    /// The form was submitted; the host has already suppressed the default.
    pub fn submit(&mut self, values: &FormValues, ctx: &mut Ctx<'_>) {
        if self.phase == FormPhase::Sending {
            return;
        }
        for field in Field::ALL {
            self.clear_error(field, ctx);
        }
        let failures = validate(values);
        for &(field, message) in &failures {
            self.errored[field.slot()] = true;
            ctx.emit(Effect::AddClass { target: Target::Field(field), class: ERROR });
            ctx.emit(Effect::SetText { target: Target::FieldError(field), text: message.to_owned() });
        }
        if !failures.is_empty() {
            log::debug!("form: {} field(s) failed validation", failures.len());
            return;
        }
        self.phase = FormPhase::Sending;
        ctx.emit(Effect::style(Target::Form, "opacity", "0.5"));
        ctx.emit(Effect::style(Target::Form, "pointer-events", "none"));
        ctx.start_timer(TimerKey::FormSent, self.config.send_delay_ms);
    }

    /// A field's content changed. Clears a standing error once the field is non-empty.
    pub fn input(&mut self, field: Field, value: &str, ctx: &mut Ctx<'_>) {
        if self.errored[field.slot()] && !is_blank_text(value) {
            self.clear_error(field, ctx);
        }
    }

    fn clear_error(&mut self, field: Field, ctx: &mut Ctx<'_>) {
        self.errored[field.slot()] = false;
        ctx.emit(Effect::RemoveClass { target: Target::Field(field), class: ERROR });
        ctx.emit(Effect::SetText { target: Target::FieldError(field), text: String::new() });
    }

    fn sent(&mut self, ctx: &mut Ctx<'_>) {
        if self.phase != FormPhase::Sending {
            return;
        }
        log::info!("form: simulated submission complete");
        self.phase = FormPhase::Editing;
        self.banner_visible = true;
        ctx.emit(Effect::ResetForm);
        ctx.emit(Effect::style(Target::Form, "opacity", "1"));
        ctx.emit(Effect::style(Target::Form, "pointer-events", "all"));
        ctx.emit(Effect::AddClass { target: Target::FormSuccess, class: SHOW });
        ctx.start_timer(TimerKey::SuccessHide, self.config.success_visible_ms);
    }
}

impl Controller for ContactForm {
    fn name(&self) -> &'static str {
        "contact-form"
    }

    fn on_timer(&mut self, key: TimerKey, ctx: &mut Ctx<'_>) {
        match key {
            TimerKey::FormSent => self.sent(ctx),
            TimerKey::SuccessHide => {
                self.banner_visible = false;
                ctx.emit(Effect::RemoveClass { target: Target::FormSuccess, class: SHOW });
            }
            _ => {}
        }
    }
}
