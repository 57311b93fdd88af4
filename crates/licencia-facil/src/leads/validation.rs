use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::domain::{LeadField, LeadFormInput, LeadSubmission, FORM_FIELDS};

/// Per-field error messages; a field without an entry is valid.
pub type FieldErrors = BTreeMap<LeadField, &'static str>;

pub const NAME_ERROR: &str = "Nombre completo válido (3-50 caracteres)";
pub const EMAIL_ERROR: &str = "Email inválido";
pub const DATE_MISSING_ERROR: &str = "Selecciona una fecha";
pub const DATE_MALFORMED_ERROR: &str = "Fecha inválida";
pub const DATE_PAST_ERROR: &str = "La fecha debe ser futura";

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]{3,50}$").expect("name pattern"))
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

/// Checks every configured field against `today`, with no side effects.
pub fn validate(input: &LeadFormInput, today: NaiveDate) -> FieldErrors {
    FORM_FIELDS
        .iter()
        .filter_map(|spec| {
            check_field(spec.field, input.value(spec.field), today)
                .err()
                .map(|message| (spec.field, message))
        })
        .collect()
}

fn check_field(field: LeadField, raw: &str, today: NaiveDate) -> Result<(), &'static str> {
    match field {
        LeadField::Name => {
            if name_pattern().is_match(raw.trim()) {
                Ok(())
            } else {
                Err(NAME_ERROR)
            }
        }
        LeadField::Email => {
            if email_pattern().is_match(raw) {
                Ok(())
            } else {
                Err(EMAIL_ERROR)
            }
        }
        LeadField::ExamDate => parse_exam_date(raw, today).map(|_| ()),
    }
}

fn parse_exam_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DATE_MISSING_ERROR);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DATE_MALFORMED_ERROR)?;
    if date < today {
        return Err(DATE_PAST_ERROR);
    }
    Ok(date)
}

impl LeadSubmission {
    /// Validates raw form values and builds the record sent to storage.
    pub fn parse(input: &LeadFormInput, today: NaiveDate) -> Result<Self, FieldErrors> {
        let errors = validate(input, today);
        if !errors.is_empty() {
            return Err(errors);
        }

        let exam_date = parse_exam_date(&input.fecha, today)
            .map_err(|message| FieldErrors::from([(LeadField::ExamDate, message)]))?;

        Ok(Self {
            name: input.nombre.trim().to_string(),
            email: input.email.clone(),
            exam_date,
        })
    }
}
