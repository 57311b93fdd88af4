use super::common::*;
use crate::leads::form::{LeadForm, SubmissionState};
use crate::leads::store::FALLBACK_MESSAGE;
use crate::leads::validation::NAME_ERROR;
use crate::leads::{LeadCapture, LeadField, LeadStoreError, SubmissionOutcome};
use std::sync::Arc;

#[tokio::test]
async fn valid_lead_is_inserted_once() {
    let (capture, store) = recording_capture();
    let mut form = LeadForm::from_input(valid_input());

    let outcome = capture
        .submit(&mut form, today())
        .await
        .expect("form is idle");

    let lead = match outcome {
        SubmissionOutcome::Registered(lead) => lead,
        other => panic!("expected registration, got {other:?}"),
    };
    assert_eq!(lead.name, "Juan Pérez");
    assert_eq!(lead.email, "juan@correo.com");
    assert_eq!(lead.exam_date, tomorrow());
    assert_eq!(store.inserts(), vec![lead]);
    assert_eq!(form.state(), SubmissionState::Success);
    assert!(form.notification().is_none());
}

#[tokio::test]
async fn short_name_blocks_the_insert() {
    let (capture, store) = recording_capture();
    let mut input = valid_input();
    input.nombre = "Al".to_string();
    let mut form = LeadForm::from_input(input);

    let outcome = capture
        .submit(&mut form, today())
        .await
        .expect("form is idle");

    assert!(matches!(outcome, SubmissionOutcome::Invalid));
    assert_eq!(form.error(LeadField::Name), Some(NAME_ERROR));
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.state(), SubmissionState::Idle);
    assert!(store.inserts().is_empty());
}

#[tokio::test]
async fn no_insert_while_any_field_is_invalid() {
    let store = RejectingStore::with_message("unreachable");
    let capture = LeadCapture::new(Arc::new(store.clone()));

    for (field, value) in [
        (LeadField::Name, "Juan 2"),
        (LeadField::Email, "juan.correo.com"),
        (LeadField::ExamDate, "2026-10-17"),
        (LeadField::ExamDate, ""),
    ] {
        let mut form = LeadForm::from_input(valid_input());
        form.edit(field, value);
        let outcome = capture.submit(&mut form, today()).await.expect("idle");
        assert!(matches!(outcome, SubmissionOutcome::Invalid), "{field:?}");
        assert!(form.error(field).is_some());
    }

    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn missing_configuration_fails_without_a_store_call() {
    let capture = LeadCapture::<RecordingStore>::unconfigured();
    let mut form = LeadForm::from_input(valid_input());

    let outcome = capture
        .submit(&mut form, today())
        .await
        .expect("form is idle");

    assert!(matches!(
        outcome,
        SubmissionOutcome::Failed(LeadStoreError::Configuration)
    ));
    assert!(!capture.is_configured());
    let notification = form.notification().expect("notification raised");
    assert_eq!(notification.title, "Error en registro");
    assert_eq!(notification.description, "Error de configuración");
    assert_eq!(form.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn backend_message_reaches_the_notification_and_values_survive() {
    let store = RejectingStore::with_message("duplicate key value violates unique constraint");
    let capture = LeadCapture::new(Arc::new(store.clone()));
    let mut form = LeadForm::from_input(valid_input());

    let outcome = capture
        .submit(&mut form, today())
        .await
        .expect("form is idle");

    assert!(matches!(outcome, SubmissionOutcome::Failed(_)));
    let notification = form.notification().expect("notification raised");
    assert!(notification.description.contains("duplicate key"));
    assert_eq!(form.state(), SubmissionState::Idle);
    assert_eq!(form.values(), &valid_input());
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn failure_without_message_uses_the_fallback_and_allows_retry() {
    let store = RejectingStore::default();
    let capture = LeadCapture::new(Arc::new(store.clone()));
    let mut form = LeadForm::from_input(valid_input());

    capture.submit(&mut form, today()).await.expect("idle");
    assert_eq!(
        form.notification().map(|n| n.description.as_str()),
        Some(FALLBACK_MESSAGE)
    );

    capture.submit(&mut form, today()).await.expect("idle again");
    assert_eq!(store.calls(), 2);
}

#[tokio::test]
async fn identical_submissions_are_not_deduplicated() {
    let (capture, store) = recording_capture();

    for _ in 0..2 {
        let mut form = LeadForm::from_input(valid_input());
        capture.submit(&mut form, today()).await.expect("idle");
    }

    let inserts = store.inserts();
    assert_eq!(inserts.len(), 2);
    assert_eq!(inserts[0], inserts[1]);
}

#[tokio::test]
async fn successful_form_must_be_dismissed_before_resubmitting() {
    let (capture, store) = recording_capture();
    let mut form = LeadForm::from_input(valid_input());
    capture.submit(&mut form, today()).await.expect("idle");

    let err = capture
        .submit(&mut form, today())
        .await
        .expect_err("form is showing the success dialog");
    assert_eq!(err.state, SubmissionState::Success);

    form.dismiss().expect("dialog closes");
    capture.submit(&mut form, today()).await.expect("idle again");
    assert_eq!(store.inserts().len(), 2);
}

#[tokio::test]
async fn editing_after_rejection_clears_only_the_edited_error() {
    let (capture, _store) = recording_capture();
    let mut form = LeadForm::from_input(Default::default());
    capture.submit(&mut form, today()).await.expect("idle");
    assert_eq!(form.errors().len(), 3);

    form.edit(LeadField::Email, "x");

    assert!(form.error(LeadField::Email).is_none());
    assert!(form.error(LeadField::Name).is_some());
    assert!(form.error(LeadField::ExamDate).is_some());
}
