//! # Salary Module
//!
//! Provides the `Salary` type attached to every [`Position`](crate::Position).
//!
//! ## Why a Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Salaries are unsigned whole currency units (30000, 25000, ...).        │
//! │                                                                         │
//! │  A bare u32 would let a slot index or a capacity be passed where a      │
//! │  salary is expected. Salary(u32) keeps them apart at compile time, and  │
//! │  payroll totals widen to u64 so summing a full roster cannot overflow.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use staffing_core::salary::Salary;
//!
//! let dev = Salary::new(30000);
//! let qa = Salary::new(25000);
//!
//! assert_eq!(Salary::total([dev, qa]), 55000);
//! assert_eq!(dev.to_string(), "30000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Salary Type
// =============================================================================

/// An unsigned salary in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Salary(u32);

impl Salary {
    /// Creates a salary from whole units.
    #[inline]
    pub const fn new(amount: u32) -> Self {
        Salary(amount)
    }

    /// Returns the amount in whole units.
    #[inline]
    pub const fn amount(&self) -> u32 {
        self.0
    }

    /// Unpaid position.
    #[inline]
    pub const fn zero() -> Self {
        Salary(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Sums salaries into a u64 so totals never overflow.
    ///
    /// ## Example
    /// ```rust
    /// use staffing_core::salary::Salary;
    ///
    /// let max = Salary::new(u32::MAX);
    /// assert_eq!(Salary::total([max, max]), 2 * u32::MAX as u64);
    /// ```
    pub fn total<I>(salaries: I) -> u64
    where
        I: IntoIterator<Item = Salary>,
    {
        salaries.into_iter().map(|s| u64::from(s.0)).sum()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Prints the bare amount, the same way the roster dump shows it.
impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Salary {
    fn default() -> Self {
        Salary::zero()
    }
}

impl From<u32> for Salary {
    fn from(amount: u32) -> Self {
        Salary(amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
