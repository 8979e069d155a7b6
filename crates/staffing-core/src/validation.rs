//! # Validation Module
//!
//! Input rules applied before values reach the roster.
//!
//! `Person::new`, `Position::new` and `Roster::new` accept anything; the
//! `try_*` / `with_validated_*` constructors route through these checks and
//! are what the demo binary uses for configuration-supplied values.
//!
//! ## Usage
//! ```rust
//! use staffing_core::validation::{validate_capacity, validate_name};
//!
//! assert!(validate_name("person name", "Ivan Ivanov").is_ok());
//! assert!(validate_name("person name", "   ").is_err());
//! assert!(validate_capacity(2).is_ok());
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LEN, MAX_ROSTER_CAPACITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name for a person or a position.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_NAME_LEN` characters
///
/// `field` names the value in the error message.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a roster capacity.
///
/// ## Rules
/// - Zero is allowed (a roster that declines every hire)
/// - Must not exceed `MAX_ROSTER_CAPACITY`
pub fn validate_capacity(capacity: usize) -> ValidationResult<()> {
    if capacity > MAX_ROSTER_CAPACITY {
        return Err(ValidationError::OutOfRange {
            field: "capacity".to_string(),
            min: 0,
            max: MAX_ROSTER_CAPACITY as u64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Developer").is_ok());
        assert!(validate_name("name", "Петро Петров").is_ok());

        assert_eq!(
            validate_name("position name", ""),
            Err(ValidationError::Required {
                field: "position name".to_string()
            })
        );
        assert!(validate_name("name", "\t \n").is_err());
        assert!(validate_name("name", &"A".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_name("name", &"A".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_name_counts_chars_not_bytes() {
        // Cyrillic letters are two bytes each in UTF-8.
        let name = "Ж".repeat(MAX_NAME_LEN);
        assert!(name.len() > MAX_NAME_LEN);
        assert!(validate_name("name", &name).is_ok());
    }

    #[test]
    fn test_validate_capacity() {
        assert!(validate_capacity(0).is_ok());
        assert!(validate_capacity(2).is_ok());
        assert!(validate_capacity(MAX_ROSTER_CAPACITY).is_ok());
        assert!(validate_capacity(MAX_ROSTER_CAPACITY + 1).is_err());
    }
}
