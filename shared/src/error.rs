use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Every failure the prototype can surface to a player. None of these are
/// fatal; views render the `Display` text inline or as a toast.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,

    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Select a day before choosing time slots")]
    NoDaySelected,

    #[error("Invalid slot identifier: {0}")]
    InvalidSlotId(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(SharedError::InvalidCredentials.to_string(), "Invalid email or password");
        assert_eq!(SharedError::PasswordMismatch.to_string(), "Passwords do not match");
        assert_eq!(
            SharedError::TermsNotAccepted.to_string(),
            "You must agree to the terms and conditions"
        );
        assert_eq!(SharedError::MissingFields.to_string(), "Please fill in all fields");
    }

    #[test]
    fn test_error_serialization() {
        let error = SharedError::InvalidSlotId("nope".to_string());
        let json = serde_json::to_string(&error).unwrap();
        let back: SharedError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, back);
    }
}
