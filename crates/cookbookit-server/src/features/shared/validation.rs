//! Shared validation utilities
//!
//! Common input validators used by commands and queries across features.

use thiserror::Error;

/// Errors that can occur during name validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameValidationError {
    #[error("{field} is required and cannot be empty")]
    Required { field: &'static str },

    #[error("{field} must be between 1 and {max_length} characters")]
    TooLong {
        field: &'static str,
        max_length: usize,
    },
}

/// Errors that can occur during quantity validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuantityValidationError {
    #[error("Quantity must be a finite number, got {0}")]
    NotFinite(f64),

    #[error("Quantity must be greater than 0, got {0}")]
    NotPositive(f64),
}

/// Errors that can occur during email validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    #[error("Email is required and cannot be empty")]
    Required,

    #[error("Email address is not valid")]
    InvalidFormat,

    #[error("Email must be at most {max_length} characters")]
    TooLong { max_length: usize },
}

/// Validate a human-readable name field
///
/// # Rules
/// - Must not be empty or whitespace-only
/// - Must be at most `max_length` characters
pub fn validate_name(
    value: &str,
    field: &'static str,
    max_length: usize,
) -> Result<(), NameValidationError> {
    if value.trim().is_empty() {
        return Err(NameValidationError::Required { field });
    }
    if value.len() > max_length {
        return Err(NameValidationError::TooLong { field, max_length });
    }
    Ok(())
}

/// Validate an inventory quantity
///
/// Quantities are strictly positive; a zero-or-negative quantity means the
/// item should not exist at all.
pub fn validate_quantity(value: f64) -> Result<(), QuantityValidationError> {
    if !value.is_finite() {
        return Err(QuantityValidationError::NotFinite(value));
    }
    if value <= 0.0 {
        return Err(QuantityValidationError::NotPositive(value));
    }
    Ok(())
}

/// Validate an email address
///
/// Intentionally shallow: one `@` with non-empty local part and a domain
/// containing a dot. Deliverability is the mail system's problem.
pub fn validate_email(value: &str) -> Result<(), EmailValidationError> {
    if value.trim().is_empty() {
        return Err(EmailValidationError::Required);
    }
    if value.len() > 100 {
        return Err(EmailValidationError::TooLong { max_length: 100 });
    }

    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        return Err(EmailValidationError::InvalidFormat);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert!(validate_name("egg", "Ingredient name", 100).is_ok());
        assert_eq!(
            validate_name("", "Ingredient name", 100),
            Err(NameValidationError::Required {
                field: "Ingredient name"
            })
        );
        assert_eq!(
            validate_name("   ", "Ingredient name", 100),
            Err(NameValidationError::Required {
                field: "Ingredient name"
            })
        );
        assert!(matches!(
            validate_name(&"a".repeat(101), "Ingredient name", 100),
            Err(NameValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn quantity_rules() {
        assert!(validate_quantity(1.5).is_ok());
        assert!(matches!(
            validate_quantity(0.0),
            Err(QuantityValidationError::NotPositive(_))
        ));
        assert!(matches!(
            validate_quantity(-2.0),
            Err(QuantityValidationError::NotPositive(_))
        ));
        assert!(matches!(
            validate_quantity(f64::NAN),
            Err(QuantityValidationError::NotFinite(_))
        ));
        assert!(matches!(
            validate_quantity(f64::INFINITY),
            Err(QuantityValidationError::NotFinite(_))
        ));
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("cook@example.com").is_ok());
        assert_eq!(validate_email(""), Err(EmailValidationError::Required));
        assert_eq!(
            validate_email("not-an-email"),
            Err(EmailValidationError::InvalidFormat)
        );
        assert_eq!(
            validate_email("@example.com"),
            Err(EmailValidationError::InvalidFormat)
        );
        assert_eq!(
            validate_email("user@nodot"),
            Err(EmailValidationError::InvalidFormat)
        );
        assert_eq!(
            validate_email("user@trailing."),
            Err(EmailValidationError::InvalidFormat)
        );
    }
}
