//! # Error Types
//!
//! Declines and validation errors for staffing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  staffing-core (this file)                                             │
//! │  ├── Decline          - Operation refused, state unchanged             │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── CoreError        - Either of the above, for `?` at call sites     │
//! │                                                                         │
//! │  staffing-demo (app)                                                   │
//! │  └── AppError         - Config / core / JSON failures                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`Decline`] is not a failure of the program. `Roster::hire`,
//! `Roster::fire` and `Calc::apply` return it inside their outcome and leave
//! every field untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Decline
// =============================================================================

/// A requested operation that was refused without changing any state.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Decline {
    /// Every slot of the roster is occupied.
    #[error("No vacant positions for {person}")]
    NoVacancy { person: String },

    /// Fire was asked for a slot index past the roster capacity.
    #[error("Invalid position index: {index} (capacity {capacity})")]
    InvalidIndex { index: usize, capacity: usize },

    /// Fire was asked for a slot that holds nobody.
    #[error("Position {index} is already vacant")]
    AlreadyVacant { index: usize },

    /// Division with a zero operand.
    #[error("Division by zero")]
    DivisionByZero,

    /// Floating remainder with a zero operand.
    #[error("Modulo by zero")]
    ModuloByZero,

    /// Character that maps to no opcode.
    #[error("Unknown operation: {op}")]
    UnknownOperation { op: char },

    /// An opcode was parsed from an empty string.
    #[error("No operation given")]
    MissingOperation,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before a value reaches the roster, e.g. a capacity read from the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced by fallible staffing-core entry points.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A decline promoted to an error by a caller that wants `?`.
    #[error("Declined: {0}")]
    Declined(#[from] Decline),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
