use super::domain::{LeadField, LeadFormInput};
use super::store::LeadStoreError;
use super::validation::FieldErrors;

/// Lifecycle of one registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    SubmitRequested,
    ValidationFailed,
    ValidationPassed,
    Stored,
    StoreFailed,
    /// The failure notification was raised; the form is interactive again.
    Acknowledged,
    /// The success dialog was closed without continuing.
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot apply {event:?} while the form is {state:?}")]
pub struct InvalidTransition {
    pub state: SubmissionState,
    pub event: SubmissionEvent,
}

impl SubmissionState {
    pub fn next(self, event: SubmissionEvent) -> Result<Self, InvalidTransition> {
        use SubmissionEvent as E;
        use SubmissionState as S;

        match (self, event) {
            (S::Idle, E::SubmitRequested) => Ok(S::Validating),
            (S::Validating, E::ValidationFailed) => Ok(S::Idle),
            (S::Validating, E::ValidationPassed) => Ok(S::Submitting),
            (S::Submitting, E::Stored) => Ok(S::Success),
            (S::Submitting, E::StoreFailed) => Ok(S::Failed),
            (S::Failed, E::Acknowledged) => Ok(S::Idle),
            (S::Success, E::Dismissed) => Ok(S::Idle),
            (state, event) => Err(InvalidTransition { state, event }),
        }
    }

    /// The submit control is disabled while a request is in flight.
    pub fn is_busy(self) -> bool {
        matches!(self, SubmissionState::Validating | SubmissionState::Submitting)
    }
}

/// Transient error banner raised when storing a lead fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: String,
}

impl Notification {
    pub fn from_store_error(err: &LeadStoreError) -> Self {
        Self {
            title: "Error en registro",
            description: err.user_message().to_string(),
        }
    }
}

/// In-memory form: current values, per-field errors and flow state.
#[derive(Debug, Clone, Default)]
pub struct LeadForm {
    values: LeadFormInput,
    errors: FieldErrors,
    state: SubmissionState,
    notification: Option<Notification>,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_input(values: LeadFormInput) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &LeadFormInput {
        &self.values
    }

    pub fn value(&self, field: LeadField) -> &str {
        self.values.value(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: LeadField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Updates one value and drops that field's error without re-validating.
    pub fn edit(&mut self, field: LeadField, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.remove(&field);
    }

    /// Closes the success dialog and returns to an editable form.
    pub fn dismiss(&mut self) -> Result<(), InvalidTransition> {
        self.apply(SubmissionEvent::Dismissed)
    }

    pub(crate) fn apply(&mut self, event: SubmissionEvent) -> Result<(), InvalidTransition> {
        self.state = self.state.next(event)?;
        Ok(())
    }

    pub(crate) fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub(crate) fn set_notification(&mut self, notification: Option<Notification>) {
        self.notification = notification;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::validation::{EMAIL_ERROR, NAME_ERROR};

    #[test]
    fn happy_path_transitions() {
        let state = SubmissionState::Idle
            .next(SubmissionEvent::SubmitRequested)
            .and_then(|s| s.next(SubmissionEvent::ValidationPassed))
            .and_then(|s| s.next(SubmissionEvent::Stored))
            .expect("legal path");
        assert_eq!(state, SubmissionState::Success);
    }

    #[test]
    fn failure_returns_to_idle_after_acknowledgement() {
        let state = SubmissionState::Submitting
            .next(SubmissionEvent::StoreFailed)
            .and_then(|s| s.next(SubmissionEvent::Acknowledged))
            .expect("legal path");
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn rejects_skipping_validation() {
        let err = SubmissionState::Idle
            .next(SubmissionEvent::Stored)
            .expect_err("idle cannot store");
        assert_eq!(err.state, SubmissionState::Idle);
        assert_eq!(err.event, SubmissionEvent::Stored);

        assert!(SubmissionState::Submitting
            .next(SubmissionEvent::SubmitRequested)
            .is_err());
    }

    #[test]
    fn busy_only_while_validating_or_submitting() {
        assert!(SubmissionState::Submitting.is_busy());
        assert!(SubmissionState::Validating.is_busy());
        assert!(!SubmissionState::Idle.is_busy());
        assert!(!SubmissionState::Success.is_busy());
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = LeadForm::new();
        form.set_errors(FieldErrors::from([
            (LeadField::Name, NAME_ERROR),
            (LeadField::Email, EMAIL_ERROR),
        ]));

        form.edit(LeadField::Name, "J");

        assert_eq!(form.value(LeadField::Name), "J");
        assert_eq!(form.error(LeadField::Name), None);
        assert_eq!(form.error(LeadField::Email), Some(EMAIL_ERROR));
    }

    #[test]
    fn editing_does_not_revalidate() {
        let mut form = LeadForm::new();
        form.edit(LeadField::Email, "not-an-email");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn dismiss_requires_a_successful_submission() {
        let mut form = LeadForm::new();
        assert!(form.dismiss().is_err());
        assert_eq!(form.state(), SubmissionState::Idle);
    }
}
