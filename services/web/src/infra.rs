use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use licencia_facil::config::StorageConfig;
use licencia_facil::error::AppError;
use licencia_facil::leads::{LeadCapture, SupabaseLeadStore};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the capture flow from configuration; missing credentials leave it
/// unconfigured so submissions fail fast instead of the service refusing to start.
pub(crate) fn lead_capture(
    storage: &StorageConfig,
) -> Result<LeadCapture<SupabaseLeadStore>, AppError> {
    let store = match storage.credentials() {
        Some(credentials) => Some(Arc::new(SupabaseLeadStore::new(&credentials)?)),
        None => {
            warn!("SUPABASE_URL or SUPABASE_ANON_KEY missing; lead submissions will fail");
            None
        }
    };
    Ok(LeadCapture::from_optional(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_build_an_unconfigured_capture() {
        let capture = lead_capture(&StorageConfig::default()).expect("builds");
        assert!(!capture.is_configured());
    }

    #[test]
    fn credentials_build_a_configured_capture() {
        let storage = StorageConfig {
            url: Some("https://demo.supabase.co".to_string()),
            anon_key: Some("anon-key".to_string()),
        };
        let capture = lead_capture(&storage).expect("builds");
        assert!(capture.is_configured());
    }
}
