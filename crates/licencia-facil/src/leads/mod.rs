//! Lead capture: form configuration, validation, the submission flow and
//! the storage seam it writes through.

pub mod capture;
pub mod domain;
pub mod form;
pub mod router;
pub mod store;
pub mod supabase;
pub mod validation;

#[cfg(test)]
mod tests;

pub use capture::{LeadCapture, SubmissionOutcome};
pub use domain::{
    FieldSpec, InputKind, LeadField, LeadFormInput, LeadSubmission, FORM_FIELDS,
    GPT_SIMULATOR_URL, LEADS_TABLE,
};
pub use form::{InvalidTransition, LeadForm, Notification, SubmissionEvent, SubmissionState};
pub use router::lead_router;
pub use store::{LeadStore, LeadStoreError};
pub use supabase::SupabaseLeadStore;
pub use validation::{validate, FieldErrors};
