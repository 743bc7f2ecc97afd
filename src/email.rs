use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0:?} is not a valid email address")]
pub struct EmailAddressError(pub String);

/// An email address that has passed the syntax check.
#[derive(Debug, Clone, PartialEq)]
pub struct Email(String);

impl Email {
    /// Create and validate an email address.
    ///
    /// The only check is that `raw_email` is not empty and contains an '@'.
    ///
    /// # Errors
    ///
    /// This function will return an error if `raw_email` is not a valid email address.
    pub fn new(raw_email: &str) -> Result<Self, EmailAddressError> {
        if raw_email.contains('@') && !raw_email.is_empty() {
            Ok(Self(raw_email.to_string()))
        } else {
            Err(EmailAddressError(raw_email.to_string()))
        }
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod email_tests {
    use super::{Email, EmailAddressError};

    #[test]
    fn create_email_success() {
        let email = Email::new("a@b.com");

        assert!(email.is_ok())
    }

    #[test]
    fn create_email_fails_with_no_at_symbol() {
        let email = Email::new("not-an-email");

        assert_eq!(email, Err(EmailAddressError("not-an-email".to_owned())));
    }

    #[test]
    fn create_email_fails_when_empty() {
        let email = Email::new("");

        assert!(matches!(email, Err(EmailAddressError(_))));
    }

    #[test]
    fn display_shows_address() {
        let email = Email::new("a@b.com").unwrap();

        assert_eq!(email.to_string(), "a@b.com");
    }
}
