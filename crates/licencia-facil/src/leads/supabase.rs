use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::domain::{LeadSubmission, LEADS_TABLE};
use super::store::{LeadStore, LeadStoreError};
use crate::config::StorageCredentials;

/// PostgREST client inserting leads into the hosted `usuarios` table.
///
/// No request timeout is configured; a hanging backend holds the request
/// until the connection settles.
#[derive(Debug, Clone)]
pub struct SupabaseLeadStore {
    client: reqwest::Client,
    endpoint: String,
    anon_key: String,
}

/// Error body PostgREST returns on failed writes.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    message: Option<String>,
}

impl SupabaseLeadStore {
    pub fn new(credentials: &StorageCredentials) -> Result<Self, LeadStoreError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("licencia-facil/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: table_endpoint(&credentials.url),
            anon_key: credentials.anon_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LeadStore for SupabaseLeadStore {
    async fn insert(&self, lead: &LeadSubmission) -> Result<(), LeadStoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(&[lead])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // PostgREST `details` echo the rejected row values; the body is never logged.
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        debug!(
            status = status.as_u16(),
            has_message = message.is_some(),
            "lead insert rejected"
        );

        Err(LeadStoreError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

fn table_endpoint(base_url: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), LEADS_TABLE)
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<PostgrestError>(body)
        .ok()
        .and_then(|err| err.message)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}
