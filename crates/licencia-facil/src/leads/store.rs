use async_trait::async_trait;

use super::domain::LeadSubmission;

pub(crate) const FALLBACK_MESSAGE: &str = "Por favor intenta nuevamente";
pub(crate) const CONFIGURATION_MESSAGE: &str = "Error de configuración";

/// Remote tabular insert so the capture flow can run against fakes.
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn insert(&self, lead: &LeadSubmission) -> Result<(), LeadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LeadStoreError {
    #[error("lead storage credentials are not configured")]
    Configuration,
    #[error("lead storage rejected the insert with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error("lead storage unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl LeadStoreError {
    /// Text shown to the visitor: the backend's message when it sent one.
    pub fn user_message(&self) -> &str {
        match self {
            LeadStoreError::Configuration => CONFIGURATION_MESSAGE,
            LeadStoreError::Rejected {
                message: Some(message),
                ..
            } => message.as_str(),
            LeadStoreError::Rejected { message: None, .. } | LeadStoreError::Transport(_) => {
                FALLBACK_MESSAGE
            }
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, LeadStoreError::Configuration)
    }
}
