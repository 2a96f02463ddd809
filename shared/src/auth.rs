//! Stand-in sign-in and sign-up checks for the prototype.
//!
//! There is no account store and no session: the login form is compared
//! against one fixed pair and registration only validates its form.

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, SharedError};

lazy_static! {
    static ref MEMBER_ID_REGEX: Regex = Regex::new(r"^(?:[A-Za-z]{2})?\d+$").unwrap();
}

pub const DEMO_EMAIL: &str = "player@example.com";
pub const DEMO_PASSWORD: &str = "chess123";

/// Login form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// The single account the prototype accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCredentials {
    pub email: String,
    pub password: String,
}

impl Default for MockCredentials {
    fn default() -> Self {
        Self {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
        }
    }
}

impl MockCredentials {
    /// Exact comparison of both fields; any mismatch yields the same
    /// generic error.
    pub fn authenticate(&self, request: &LoginRequest) -> Result<()> {
        if request.email == self.email && request.password == self.password {
            info!("Mock sign-in accepted for {}", request.email);
            Ok(())
        } else {
            debug!("Mock sign-in rejected");
            Err(SharedError::InvalidCredentials)
        }
    }
}

/// Checks a login against [`MockCredentials::default`].
pub fn authenticate(request: &LoginRequest) -> Result<()> {
    MockCredentials::default().authenticate(request)
}

/// Sign-up form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Full name is required"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    /// Chess South Africa membership number
    #[validate(regex(path = "MEMBER_ID_REGEX", message = "CHESSA ID must be a number, optionally prefixed by a country code"))]
    pub chessa_id: Option<String>,

    #[validate(regex(path = "MEMBER_ID_REGEX", message = "FIDE ID must be a number"))]
    pub fide_id: Option<String>,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    pub confirm_password: String,

    pub agree_to_terms: bool,
}

impl RegisterRequest {
    /// Blank optional ids are treated as not given.
    pub fn normalized(mut self) -> Self {
        self.chessa_id = self.chessa_id.filter(|id| !id.trim().is_empty());
        self.fide_id = self.fide_id.filter(|id| !id.trim().is_empty());
        self
    }
}

/// Password confirmation first, then the terms checkbox, then field rules.
pub fn validate_registration(request: &RegisterRequest) -> Result<()> {
    if request.password != request.confirm_password {
        return Err(SharedError::PasswordMismatch);
    }
    if !request.agree_to_terms {
        return Err(SharedError::TermsNotAccepted);
    }
    request.clone().normalized().validate()?;
    debug!("Registration form for {} is valid", request.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use test_log::test;

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            remember_me: false,
        }
    }

    fn create_test_registration() -> RegisterRequest {
        RegisterRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            chessa_id: Some("123456".to_string()),
            fide_id: None,
            password: "secret-pass".to_string(),
            confirm_password: "secret-pass".to_string(),
            agree_to_terms: true,
        }
    }

    #[test]
    fn test_demo_credentials_accepted() {
        assert_eq!(authenticate(&login("player@example.com", "chess123")), Ok(()));
    }

    #[test_case("player@example.com", "chess124" ; "wrong password")]
    #[test_case("someone@example.com", "chess123" ; "wrong email")]
    #[test_case("PLAYER@example.com", "chess123" ; "email is case sensitive")]
    #[test_case("", "" ; "empty form")]
    fn test_other_credentials_rejected(email: &str, password: &str) {
        let error = authenticate(&login(email, password)).unwrap_err();
        assert_eq!(error.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_registration_valid() {
        assert!(validate_registration(&create_test_registration()).is_ok());
    }

    #[test]
    fn test_registration_password_mismatch_checked_first() {
        let mut request = create_test_registration();
        request.confirm_password = "other".to_string();
        request.agree_to_terms = false;
        assert_eq!(validate_registration(&request), Err(SharedError::PasswordMismatch));
    }

    #[test]
    fn test_registration_requires_terms() {
        let mut request = create_test_registration();
        request.agree_to_terms = false;
        assert_eq!(validate_registration(&request), Err(SharedError::TermsNotAccepted));
    }

    #[test]
    fn test_registration_rejects_bad_email() {
        let mut request = create_test_registration();
        request.email = "not-an-email".to_string();
        assert!(matches!(validate_registration(&request), Err(SharedError::Validation(_))));
    }

    #[test]
    fn test_registration_rejects_non_numeric_ids() {
        let mut request = create_test_registration();
        request.fide_id = Some("FIDE-87".to_string());
        let result = validate_registration(&request);
        assert!(matches!(result, Err(SharedError::Validation(_))));
    }

    #[test]
    fn test_registration_accepts_prefixed_chessa_id() {
        let mut request = create_test_registration();
        request.chessa_id = Some("SA10076542".to_string());
        assert!(validate_registration(&request).is_ok());
    }

    #[test]
    fn test_registration_ignores_blank_ids() {
        let mut request = create_test_registration();
        request.chessa_id = Some("  ".to_string());
        request.fide_id = Some(String::new());
        assert!(validate_registration(&request).is_ok());
    }

    #[test]
    fn test_registration_requires_name() {
        let mut request = create_test_registration();
        request.name = String::new();
        let result = request.validate();
        assert!(result.unwrap_err().field_errors().contains_key("name"));
    }
}
