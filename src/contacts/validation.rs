//! Field validation for contacts.
//!
//! All checks are anchored whole-string matches. Nothing here touches the
//! network: an email is "valid" when it has the right shape.

use crate::model::Contact;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

// \d is Unicode-aware in the regex crate, so digits are spelled out.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{10}|[0-9]{3}-[0-9]{3}-[0-9]{4})$").expect("phone pattern"));

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Invalid email.")]
    InvalidEmail,

    #[error("Invalid phone number.")]
    InvalidPhone,
}

pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accepts `1234567890` or `123-456-7890`, nothing else.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Checks name, email and phone in that order and reports the first failure.
pub fn validate_contact(contact: &Contact) -> Result<(), ValidationError> {
    if !validate_name(&contact.name) {
        return Err(ValidationError::EmptyName);
    }
    if !validate_email(&contact.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !validate_phone(&contact.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_emails() {
        for email in [
            "alice@example.com",
            "first.last@sub.example.org",
            "a_b%c+d-e@host-name.io",
            "X9@Y.CO",
        ] {
            assert!(validate_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "",
            "bad-email",
            "@example.com",
            "alice@",
            "alice@example",
            "alice@example.c",
            "alice@@example.com",
            "alice @example.com",
            "alice@example.com ",
            "alice@exa mple.com",
            "alice@example.c0m",
        ] {
            assert!(!validate_email(email), "{email:?} should be invalid");
        }
    }

    #[test]
    fn accepted_emails_have_one_at_and_a_dot_after_it() {
        for email in ["a@b.cd", "first.last@sub.example.org", "x+y@z-w.museum"] {
            assert!(validate_email(email));
            assert_eq!(email.matches('@').count(), 1);
            let (_, domain) = email.split_once('@').unwrap();
            assert!(domain.contains('.'));
            assert!(!email.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn accepts_both_phone_shapes() {
        assert!(validate_phone("1234567890"));
        assert!(validate_phone("123-456-7890"));
    }

    #[test]
    fn rejects_other_phone_shapes() {
        for phone in [
            "",
            "123456789",
            "12345678901",
            "123-4567-890",
            "123.456.7890",
            "(123) 456-7890",
            "+1 123-456-7890",
            "123-456-789a",
            "1234-56-7890",
            "123 456 7890",
            "١٢٣٤٥٦٧٨٩٠",
        ] {
            assert!(!validate_phone(phone), "{phone:?} should be invalid");
        }
    }

    #[test]
    fn name_must_have_visible_text() {
        assert!(validate_name("Alice"));
        assert!(!validate_name(""));
        assert!(!validate_name("   "));
    }

    #[test]
    fn contact_reports_first_failing_field() {
        let mut contact = Contact::new("", "bad", "bad");
        assert_eq!(validate_contact(&contact), Err(ValidationError::EmptyName));

        contact.name = "Alice".into();
        assert_eq!(validate_contact(&contact), Err(ValidationError::InvalidEmail));

        contact.email = "alice@example.com".into();
        assert_eq!(validate_contact(&contact), Err(ValidationError::InvalidPhone));

        contact.phone = "123-456-7890".into();
        assert_eq!(validate_contact(&contact), Ok(()));
    }
}
