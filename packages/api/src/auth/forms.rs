//! # Login and registration form schemas
//!
//! Both forms have the same two fields and differ only in their rules. Each
//! field is validated by one custom function so it yields at most one message,
//! with "required" taking precedence over format rules.
//!
//! | Form | `username` | `password` |
//! |------|------------|------------|
//! | [`LoginForm`] | required, email | required, at least 6 characters |
//! | [`RegisterForm`] | required, email | required, 8+ characters with lower, upper, digit and one of `!@#$%^&*` |

use std::borrow::Cow;

use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// Characters that satisfy the "special character" rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

const USERNAME_REQUIRED: &str = "Username is Required";
const PASSWORD_REQUIRED: &str = "Password is Required";

/// Per-field messages shown under the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl FormErrors {
    fn first_message(errors: &ValidationErrors, field: &str) -> Option<String> {
        errors
            .field_errors()
            .get(field)
            .and_then(|list| list.first())
            .map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            })
    }
}

impl From<&ValidationErrors> for FormErrors {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            username: Self::first_message(errors, "username"),
            password: Self::first_message(errors, "password"),
        }
    }
}

/// Credentials typed into the login screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "login_username"))]
    pub username: String,
    #[validate(custom(function = "login_password"))]
    pub password: String,
}

/// Credentials typed into the registration screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct RegisterForm {
    #[validate(custom(function = "register_username"))]
    pub username: String,
    #[validate(custom(function = "register_password"))]
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Validate, projecting failures into per-field messages.
    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(|e| FormErrors::from(&e))
    }
}

impl RegisterForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Validate, projecting failures into per-field messages.
    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(|e| FormErrors::from(&e))
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn email_field(value: &str, format_message: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("required", USERNAME_REQUIRED));
    }
    if !value.validate_email() {
        return Err(invalid("email", format_message));
    }
    Ok(())
}

fn login_username(value: &str) -> Result<(), ValidationError> {
    email_field(value, "Enter a Valid Email")
}

fn register_username(value: &str) -> Result<(), ValidationError> {
    email_field(value, "Enter a valid email")
}

fn login_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("required", PASSWORD_REQUIRED));
    }
    if value.chars().count() < 6 {
        return Err(invalid("length", "password should be minimum 6 characters"));
    }
    Ok(())
}

fn register_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("required", PASSWORD_REQUIRED));
    }
    if !is_complex(value) {
        return Err(invalid(
            "complexity",
            "Must Contain 8 Characters, One Uppercase, One Lowercase, One Number and One Special Case Character",
        ));
    }
    Ok(())
}

/// At least 8 characters, with a lowercase letter, an uppercase letter, a digit
/// and one of [`SPECIAL_CHARACTERS`].
pub fn is_complex(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_valid() {
        assert!(LoginForm::new("a@x.com", "secret").check().is_ok());
    }

    #[test]
    fn test_login_form_required_fields() {
        let errors = LoginForm::default().check().unwrap_err();
        assert_eq!(errors.username.as_deref(), Some("Username is Required"));
        assert_eq!(errors.password.as_deref(), Some("Password is Required"));
    }

    #[test]
    fn test_login_form_format_rules() {
        let errors = LoginForm::new("not-an-email", "12345").check().unwrap_err();
        assert_eq!(errors.username.as_deref(), Some("Enter a Valid Email"));
        assert_eq!(
            errors.password.as_deref(),
            Some("password should be minimum 6 characters")
        );
    }

    #[test]
    fn test_login_form_only_failing_field_reported() {
        let errors = LoginForm::new("a@x.com", "123").check().unwrap_err();
        assert!(errors.username.is_none());
        assert!(errors.password.is_some());
    }

    #[test]
    fn test_register_form_valid() {
        assert!(RegisterForm::new("new@x.com", "Passw0rd!").check().is_ok());
    }

    #[test]
    fn test_register_form_messages() {
        let errors = RegisterForm::default().check().unwrap_err();
        assert_eq!(errors.username.as_deref(), Some("Username is Required"));
        assert_eq!(errors.password.as_deref(), Some("Password is Required"));

        let errors = RegisterForm::new("nope", "password").check().unwrap_err();
        assert_eq!(errors.username.as_deref(), Some("Enter a valid email"));
        assert_eq!(
            errors.password.as_deref(),
            Some("Must Contain 8 Characters, One Uppercase, One Lowercase, One Number and One Special Case Character")
        );
    }

    #[test]
    fn test_complexity_each_rule() {
        assert!(is_complex("Passw0rd!"));
        assert!(!is_complex("Pw0rd!"), "too short");
        assert!(!is_complex("PASSW0RD!"), "no lowercase");
        assert!(!is_complex("passw0rd!"), "no uppercase");
        assert!(!is_complex("Password!"), "no digit");
        assert!(!is_complex("Passw0rd?"), "? is not a special character");
        assert!(is_complex("Aa1&aaaa"));
    }
}
