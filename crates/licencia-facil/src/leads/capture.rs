use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::domain::LeadSubmission;
use super::form::{InvalidTransition, LeadForm, Notification, SubmissionEvent};
use super::store::{LeadStore, LeadStoreError};

/// Result of one submit action.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Validation failed; errors are set on the form and nothing was sent.
    Invalid,
    /// The lead was stored once.
    Registered(LeadSubmission),
    /// Storage failed or is not configured; a notification is set on the form.
    Failed(LeadStoreError),
}

/// Runs the validate, insert, acknowledge flow against an injected store.
pub struct LeadCapture<S> {
    store: Option<Arc<S>>,
}

impl<S> LeadCapture<S>
where
    S: LeadStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store: Some(store) }
    }

    /// A capture flow with no backend; every valid submission fails fast.
    pub fn unconfigured() -> Self {
        Self { store: None }
    }

    pub fn from_optional(store: Option<Arc<S>>) -> Self {
        Self { store }
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    /// Validates the form and issues exactly one insert when it passes.
    ///
    /// Fails only when the form is not idle, e.g. a submission is already
    /// in flight.
    pub async fn submit(
        &self,
        form: &mut LeadForm,
        today: NaiveDate,
    ) -> Result<SubmissionOutcome, InvalidTransition> {
        form.apply(SubmissionEvent::SubmitRequested)?;
        form.set_notification(None);

        let lead = match LeadSubmission::parse(form.values(), today) {
            Ok(lead) => lead,
            Err(errors) => {
                info!(fields = ?errors.keys().collect::<Vec<_>>(), "lead rejected by validation");
                form.set_errors(errors);
                form.apply(SubmissionEvent::ValidationFailed)?;
                return Ok(SubmissionOutcome::Invalid);
            }
        };

        form.set_errors(Default::default());
        form.apply(SubmissionEvent::ValidationPassed)?;

        let result = match &self.store {
            Some(store) => store.insert(&lead).await,
            None => Err(LeadStoreError::Configuration),
        };

        match result {
            Ok(()) => {
                info!(exam_date = %lead.exam_date, "lead registered");
                form.apply(SubmissionEvent::Stored)?;
                Ok(SubmissionOutcome::Registered(lead))
            }
            Err(err) => {
                warn!(error = %err, "lead registration failed");
                form.set_notification(Some(Notification::from_store_error(&err)));
                form.apply(SubmissionEvent::StoreFailed)?;
                form.apply(SubmissionEvent::Acknowledged)?;
                Ok(SubmissionOutcome::Failed(err))
            }
        }
    }
}
