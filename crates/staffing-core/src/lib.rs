//! # staffing-core: Roster Slots and Accumulator Calculator
//!
//! Two independent, I/O-free components:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         staffing-core                                   │
//! │                                                                         │
//! │   ┌───────────────────────────────┐   ┌───────────────────────────┐    │
//! │   │            Roster             │   │           Calc            │    │
//! │   │  slot 0: Option<Assignment>   │   │  accumulator: f64         │    │
//! │   │  slot 1: Option<Assignment>   │   │  operand:     f64         │    │
//! │   │  ...   (capacity fixed)       │   │  apply(Opcode) / exe(char)│    │
//! │   │  hire / fire / snapshot       │   └───────────────────────────┘    │
//! │   └──────────────┬────────────────┘                                    │
//! │                  │ borrows                                              │
//! │        ┌─────────┴─────────┐                                           │
//! │        │ Person │ Position │  (owned by the caller)                    │
//! │        └───────────────────┘                                           │
//! │                                                                         │
//! │   NO I/O • declines are values, not panics • events via `tracing`       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Person, Position, Assignment and snapshot views
//! - [`salary`] - Unsigned salary newtype
//! - [`roster`] - Fixed-capacity first-fit slot roster
//! - [`calc`] - Opcode-dispatched accumulator calculator
//! - [`error`] - Declines and validation errors
//! - [`validation`] - Name and capacity rules
//!
//! ## Example Usage
//!
//! ```rust
//! use staffing_core::{Person, Position, Roster, Salary};
//!
//! let boss = Person::new("Boss");
//! let ivan = Person::new("Ivan Ivanov");
//! let dev = Position::new("Developer", Salary::new(30000));
//!
//! let mut firm = Roster::new(&boss, 1);
//! assert!(firm.hire(&ivan, &dev).is_applied());
//! assert_eq!(firm.vacancies(), 0);
//! assert_eq!(firm.close(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calc;
pub mod error;
pub mod roster;
pub mod salary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calc::{Calc, Opcode};
pub use error::{CoreError, CoreResult, Decline, ValidationError};
pub use roster::{FireOutcome, HireOutcome, Roster};
pub use salary::Salary;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound accepted by [`Roster::with_validated_capacity`].
///
/// `Roster::new` takes any capacity; this limit only guards values coming
/// from configuration.
pub const MAX_ROSTER_CAPACITY: usize = 10_000;

/// Maximum length of a person or position name, in characters.
pub const MAX_NAME_LEN: usize = 100;
