use std::fmt;
use thiserror::Error;

/// A single rejected admin-form field. `label` is a UI-label key; see [`crate::i18n::Labels`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub label: &'static str,
}

impl FieldError {
    pub fn new(field: impl Into<String>, label: &'static str) -> Self {
        Self {
            field: field.into(),
            label,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.label)
    }
}

#[derive(Error, Debug)]
pub enum NotablesError {
    #[error("Personality not found: {0}")]
    NotFound(u32),

    #[error("Validation rejected: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    #[error("Admin session required")]
    Unauthorized,

    #[error("Summary unavailable")]
    SummaryUnavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, NotablesError>;
