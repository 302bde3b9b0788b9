//! Schema-validated form models behind the create/edit dialogs.
//!
//! Each dialog owns one of these plain structs: pre-populated from a DTO
//! in edit mode, defaulted in create mode, and mapped field-for-field to
//! the endpoint's request payload on submit. Validation runs before any
//! network call; failures become per-field messages and the submit is
//! abandoned.

pub mod actor;
pub mod drama;
pub mod episode;
pub mod genre;
pub mod login;
pub mod season;

use std::collections::HashMap;

use chrono::NaiveDate;
use validator::{Validate, ValidationError, ValidationErrors};

pub use actor::ActorForm;
pub use drama::DramaForm;
pub use episode::EpisodeForm;
pub use genre::GenreForm;
pub use login::LoginForm;
pub use season::SeasonForm;

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(HashMap<String, String>);

impl FormErrors {
    pub fn get(&self, field: &str) -> Option<String> {
        self.0.get(field).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&ValidationErrors> for FormErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let map = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let message = field_errors
                    .first()
                    .and_then(|error| error.message.as_ref())
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                (field.to_string(), message)
            })
            .collect();
        Self(map)
    }
}

/// Runs a form's schema, mapping failures to per-field messages.
pub fn check<T: Validate>(form: &T) -> Result<(), FormErrors> {
    form.validate().map_err(|errors| FormErrors::from(&errors))
}

/// URL fields that may be left blank; anything entered must parse.
pub fn optional_url(value: &str) -> Result<(), ValidationError> {
    use validator::ValidateUrl;

    if value.trim().is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

/// Date fields that may be left blank; anything entered must be a
/// `YYYY-MM-DD` calendar date.
pub fn optional_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || parse_date(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("date"))
    }
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Empty strings become `None` at the payload boundary.
pub(crate) fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests;
