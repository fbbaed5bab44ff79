//! Error response body

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Error returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Per-field validation failures (field name -> rule)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
        }
    }

    pub fn with_fields(error: impl Into<String>, fields: FieldErrors) -> Self {
        Self {
            error: error.into(),
            fields: Some(fields.0),
        }
    }
}

/// Accumulates request field validation failures
#[derive(Debug, Default, PartialEq)]
pub struct FieldErrors(pub BTreeMap<String, String>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, rule: &str) {
        self.0.insert(field.to_string(), rule.to_string());
    }

    /// Require a non-blank string, returned as given
    pub fn required(&mut self, field: &str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.add(field, "required");
                String::new()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ok(value) when nothing failed, otherwise the collected errors
    pub fn finish<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_keeps_value_as_given() {
        let mut errors = FieldErrors::default();

        assert_eq!(errors.required("name", Some(" IPA".to_string())), " IPA");
        assert!(errors.is_empty());

        errors.required("style", Some(" \t".to_string()));
        errors.required("brewery", None);
        assert_eq!(errors.0.get("style").map(String::as_str), Some("required"));
        assert_eq!(errors.0.get("brewery").map(String::as_str), Some("required"));
    }
}
