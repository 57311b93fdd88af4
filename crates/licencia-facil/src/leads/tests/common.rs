use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::{Duration, NaiveDate};

use crate::leads::domain::{LeadFormInput, LeadSubmission};
use crate::leads::store::{LeadStore, LeadStoreError};
use crate::leads::{lead_router, LeadCapture};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

pub(super) fn tomorrow() -> NaiveDate {
    today() + Duration::days(1)
}

pub(super) fn valid_input() -> LeadFormInput {
    LeadFormInput {
        nombre: "Juan Pérez".to_string(),
        email: "juan@correo.com".to_string(),
        fecha: tomorrow().format("%Y-%m-%d").to_string(),
    }
}

/// Store that records every insert and succeeds.
#[derive(Default, Clone)]
pub(super) struct RecordingStore {
    inserts: Arc<Mutex<Vec<LeadSubmission>>>,
}

impl RecordingStore {
    pub(super) fn inserts(&self) -> Vec<LeadSubmission> {
        self.inserts.lock().expect("store mutex poisoned").clone()
    }
}

#[async_trait]
impl LeadStore for RecordingStore {
    async fn insert(&self, lead: &LeadSubmission) -> Result<(), LeadStoreError> {
        self.inserts
            .lock()
            .expect("store mutex poisoned")
            .push(lead.clone());
        Ok(())
    }
}

/// Store that counts calls and rejects each one with a fixed backend message.
#[derive(Default, Clone)]
pub(super) struct RejectingStore {
    message: Option<String>,
    calls: Arc<Mutex<usize>>,
}

impl RejectingStore {
    pub(super) fn with_message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            calls: Arc::default(),
        }
    }

    pub(super) fn calls(&self) -> usize {
        *self.calls.lock().expect("store mutex poisoned")
    }
}

#[async_trait]
impl LeadStore for RejectingStore {
    async fn insert(&self, _lead: &LeadSubmission) -> Result<(), LeadStoreError> {
        *self.calls.lock().expect("store mutex poisoned") += 1;
        Err(LeadStoreError::Rejected {
            status: 409,
            message: self.message.clone(),
        })
    }
}

pub(super) fn recording_capture() -> (LeadCapture<RecordingStore>, RecordingStore) {
    let store = RecordingStore::default();
    (LeadCapture::new(Arc::new(store.clone())), store)
}

pub(super) fn router_with_store<S>(store: S) -> axum::Router
where
    S: LeadStore + 'static,
{
    lead_router(Arc::new(LeadCapture::new(Arc::new(store))))
}

pub(super) async fn read_html_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
