//! Contact form validation and the simulated submit cycle.

use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

use crate::config::Timings;
use crate::timer::{Schedule, TimerDriven, TimerSlot, TimerToken};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn all() -> [Field; 4] {
        [Self::Name, Self::Email, Self::Subject, Self::Message]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::all().iter().all(|f| self.get(*f).is_empty())
    }
}

/// Checks every field and returns only the failing ones.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::NameRequired);
    }

    // the pattern is checked against the raw value, so stray whitespace fails
    if form.email.trim().is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !EMAIL_RE.is_match(&form.email) {
        errors.insert(Field::Email, FieldError::EmailInvalid);
    }

    if form.subject.trim().is_empty() {
        errors.insert(Field::Subject, FieldError::SubjectRequired);
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, FieldError::MessageRequired);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(Field::Message, FieldError::MessageTooShort);
    }

    errors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are now set.
    Rejected,
    /// A submission is already in flight.
    Ignored,
    Scheduled(Schedule),
}

impl SubmitOutcome {
    pub fn schedule(self) -> Option<Schedule> {
        match self {
            Self::Scheduled(s) => Some(s),
            _ => None,
        }
    }
}

/// The contact form widget: field values, stored errors and the fake
/// `Idle -> Submitting -> Submitted -> Idle` cycle.
#[derive(Debug)]
pub struct ContactState {
    form: ContactForm,
    errors: FieldErrors,
    phase: SubmitPhase,
    submit_delay: Duration,
    success_display: Duration,
    slot: TimerSlot,
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new(&Timings::default())
    }
}

impl ContactState {
    pub fn new(timings: &Timings) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::new(),
            phase: SubmitPhase::Idle,
            submit_delay: timings.submit_delay,
            success_display: timings.success_display,
            slot: TimerSlot::new(),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Stores a keystroke. The field's error goes away without re-validating.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.form.get_mut(field) = value.into();
        self.errors.remove(&field);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != SubmitPhase::Idle {
            return SubmitOutcome::Ignored;
        }
        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            log::debug!("contact: {} invalid field(s)", self.errors.len());
            return SubmitOutcome::Rejected;
        }
        self.phase = SubmitPhase::Submitting;
        log::debug!("contact: submitting");
        SubmitOutcome::Scheduled(self.slot.arm(self.submit_delay))
    }
}

impl TimerDriven for ContactState {
    fn on_timer(&mut self, token: TimerToken) -> Option<Schedule> {
        if !self.slot.fire(token) {
            return None;
        }
        match self.phase {
            SubmitPhase::Submitting => {
                self.phase = SubmitPhase::Submitted;
                log::debug!("contact: submitted");
                Some(self.slot.arm(self.success_display))
            }
            SubmitPhase::Submitted => {
                self.phase = SubmitPhase::Idle;
                self.form = ContactForm::default();
                None
            }
            SubmitPhase::Idle => {
                log::warn!("contact: timer fired while idle");
                None
            }
        }
    }

    fn cancel_timers(&mut self) {
        self.slot.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualClock;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "I would like to talk about Kubernetes.".into(),
        }
    }

    fn filled_state(form: ContactForm) -> ContactState {
        let mut state = ContactState::default();
        for field in Field::all() {
            state.set_field(field, form.get(field));
        }
        state
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate(&ContactForm::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Name].to_string(), "Name is required");
        assert_eq!(errors[&Field::Email].to_string(), "Email is required");
        assert_eq!(errors[&Field::Subject].to_string(), "Subject is required");
        assert_eq!(errors[&Field::Message].to_string(), "Message is required");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let form = ContactForm {
            name: "   ".into(),
            ..valid_form()
        };
        assert_eq!(
            validate(&form),
            FieldErrors::from([(Field::Name, FieldError::NameRequired)])
        );
    }

    #[test]
    fn test_invalid_email_is_the_only_error() {
        let form = ContactForm {
            email: "not-an-email".into(),
            ..valid_form()
        };
        let errors = validate(&form);
        assert_eq!(errors, FieldErrors::from([(Field::Email, FieldError::EmailInvalid)]));
        assert_eq!(errors[&Field::Email].to_string(), "Please enter a valid email");
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.co", "first.last@sub.domain.io"] {
            let form = ContactForm { email: ok.into(), ..valid_form() };
            assert!(validate(&form).is_empty(), "{ok} should pass");
        }
        for bad in ["a@b", "a b@c.d", "@b.co", " a@b.co"] {
            let form = ContactForm { email: bad.into(), ..valid_form() };
            assert_eq!(validate(&form).get(&Field::Email), Some(&FieldError::EmailInvalid), "{bad:?}");
        }
    }

    #[test]
    fn test_short_message() {
        let form = ContactForm {
            message: "hello".into(),
            ..valid_form()
        };
        let errors = validate(&form);
        assert_eq!(errors, FieldErrors::from([(Field::Message, FieldError::MessageTooShort)]));
        assert_eq!(
            errors[&Field::Message].to_string(),
            "Message must be at least 10 characters"
        );
        // length is measured after trimming
        let padded = ContactForm {
            message: "  123456789  ".into(),
            ..valid_form()
        };
        assert!(validate(&padded).contains_key(&Field::Message));
    }

    #[test]
    fn test_validation_does_not_touch_fields() {
        let form = ContactForm {
            name: "  Ada ".into(),
            ..valid_form()
        };
        let before = form.clone();
        let _ = validate(&form);
        assert_eq!(form, before);
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut state = ContactState::default();
        assert_eq!(state.submit(), SubmitOutcome::Rejected);
        assert_eq!(state.errors().len(), 4);

        state.set_field(Field::Email, "still wrong");
        assert_eq!(state.error(Field::Email), None);
        assert_eq!(state.error(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(state.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_valid_submission_cycle() {
        let timings = Timings::default();
        let mut state = filled_state(valid_form());
        let mut clock = VirtualClock::new();

        clock.schedule(state.submit().schedule());
        assert_eq!(state.phase(), SubmitPhase::Submitting);
        assert!(state.errors().is_empty());
        assert_eq!(state.submit(), SubmitOutcome::Ignored);

        clock.advance(&mut state, timings.submit_delay - Duration::from_millis(1));
        assert_eq!(state.phase(), SubmitPhase::Submitting);
        clock.advance(&mut state, Duration::from_millis(1));
        assert_eq!(state.phase(), SubmitPhase::Submitted);
        assert_eq!(state.form(), &valid_form());
        assert_eq!(state.submit(), SubmitOutcome::Ignored);

        clock.advance(&mut state, timings.success_display);
        assert_eq!(state.phase(), SubmitPhase::Idle);
        assert!(state.form().is_empty());
        assert!(state.errors().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_teardown_stops_the_cycle() {
        let mut state = filled_state(valid_form());
        let mut clock = VirtualClock::new();
        clock.schedule(state.submit().schedule());
        state.cancel_timers();
        clock.run_until_idle(&mut state);
        assert_eq!(state.phase(), SubmitPhase::Submitting);
        assert_eq!(state.form(), &valid_form());
    }
}
