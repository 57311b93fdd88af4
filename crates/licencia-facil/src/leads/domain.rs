use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Chat-based simulator users continue to after registering.
pub const GPT_SIMULATOR_URL: &str =
    "https://chatgpt.com/g/g-68790d6572148191a6a6c4cdb2059c68-simulador-clase-b-chile";

/// Table receiving lead rows on the storage backend.
pub const LEADS_TABLE: &str = "usuarios";

/// Fields captured by the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeadField {
    Name,
    Email,
    ExamDate,
}

impl LeadField {
    pub const ALL: [LeadField; 3] = [LeadField::Name, LeadField::Email, LeadField::ExamDate];

    /// Form and storage column name.
    pub fn name(self) -> &'static str {
        match self {
            LeadField::Name => "nombre",
            LeadField::Email => "email",
            LeadField::ExamDate => "fecha",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Date,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Date => "date",
        }
    }
}

/// Rendering metadata for one form input.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: LeadField,
    pub label: &'static str,
    pub input_kind: InputKind,
    pub placeholder: Option<&'static str>,
}

pub const FORM_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        field: LeadField::Name,
        label: "Nombre completo",
        input_kind: InputKind::Text,
        placeholder: Some("Ej: Juan Pérez González"),
    },
    FieldSpec {
        field: LeadField::Email,
        label: "Correo electrónico",
        input_kind: InputKind::Email,
        placeholder: Some("Ej: juan@correo.com"),
    },
    FieldSpec {
        field: LeadField::ExamDate,
        label: "Fecha de examen",
        input_kind: InputKind::Date,
        placeholder: None,
    },
];

/// Raw form values exactly as the browser posted them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFormInput {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub fecha: String,
}

impl LeadFormInput {
    pub fn value(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.nombre,
            LeadField::Email => &self.email,
            LeadField::ExamDate => &self.fecha,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::Name => &mut self.nombre,
            LeadField::Email => &mut self.email,
            LeadField::ExamDate => &mut self.fecha,
        };
        *slot = value.into();
    }
}

/// A validated lead, serialized with the storage column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSubmission {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "fecha")]
    pub exam_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_names_round_trip_through_lookup() {
        for field in LeadField::ALL {
            assert_eq!(LeadField::from_name(field.name()), Some(field));
        }
        assert_eq!(LeadField::from_name("telefono"), None);
    }

    #[test]
    fn form_table_covers_every_field_once() {
        let fields: Vec<LeadField> = FORM_FIELDS.iter().map(|spec| spec.field).collect();
        assert_eq!(fields, LeadField::ALL.to_vec());
        assert!(FORM_FIELDS[2].placeholder.is_none());
    }

    #[test]
    fn submission_serializes_with_column_names() {
        let lead = LeadSubmission {
            name: "Juan Pérez".to_string(),
            email: "juan@correo.com".to_string(),
            exam_date: NaiveDate::from_ymd_opt(2026, 11, 2).expect("valid date"),
        };
        let value = serde_json::to_value(&lead).expect("serializes");
        assert_eq!(
            value,
            json!({ "nombre": "Juan Pérez", "email": "juan@correo.com", "fecha": "2026-11-02" })
        );
    }
}
