use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;

use super::capture::{LeadCapture, SubmissionOutcome};
use super::domain::LeadFormInput;
use super::form::LeadForm;
use super::store::LeadStore;
use crate::error::AppError;
use crate::pages::landing::SUBMIT_PATH;
use crate::pages::{landing, privacy, PRIVACY_PATH};

/// Router serving the landing page, the registration endpoint and the policy page.
pub fn lead_router<S>(capture: Arc<LeadCapture<S>>) -> Router
where
    S: LeadStore + 'static,
{
    Router::new()
        .route("/", get(landing_handler))
        .route(SUBMIT_PATH, post(submit_handler::<S>))
        .route(PRIVACY_PATH, get(privacy_handler))
        .with_state(capture)
}

pub(crate) async fn landing_handler() -> Html<String> {
    let today = Local::now().date_naive();
    Html(landing::render(&LeadForm::new(), today))
}

pub(crate) async fn privacy_handler() -> Html<String> {
    let today = Local::now().date_naive();
    Html(privacy::render(today))
}

pub(crate) async fn submit_handler<S>(
    State(capture): State<Arc<LeadCapture<S>>>,
    Form(input): Form<LeadFormInput>,
) -> Response
where
    S: LeadStore + 'static,
{
    let today = Local::now().date_naive();
    let mut form = LeadForm::from_input(input);

    let status = match capture.submit(&mut form, today).await {
        Ok(SubmissionOutcome::Registered(_)) => StatusCode::OK,
        Ok(SubmissionOutcome::Invalid) => StatusCode::UNPROCESSABLE_ENTITY,
        Ok(SubmissionOutcome::Failed(err)) if err.is_configuration() => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        Ok(SubmissionOutcome::Failed(_)) => StatusCode::BAD_GATEWAY,
        Err(err) => return AppError::from(err).into_response(),
    };

    (status, Html(landing::render(&form, today))).into_response()
}
