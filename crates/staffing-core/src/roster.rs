//! # Roster
//!
//! A boss with a fixed number of staff slots. Hiring fills the lowest free
//! slot; firing empties one by index.
//!
//! ## Slot Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Roster Slot Operations                               │
//! │                                                                         │
//! │  Call                     Slot Change              Outcome              │
//! │  ────                     ───────────              ───────              │
//! │                                                                         │
//! │  hire(p, pos) ──────────► first None → Some(a) ──► Hired { index }      │
//! │               └─ all Some ──────────────────────► Declined(NoVacancy)   │
//! │                                                                         │
//! │  fire(i) ───────────────► slots[i] Some → None ──► Fired { index }      │
//! │          ├─ i >= capacity ──────────────────────► Declined(InvalidIndex)│
//! │          └─ slots[i] None ──────────────────────► Declined(AlreadyVacant)│
//! │                                                                         │
//! │  snapshot() ────────────► (read only) ───────────► StaffSnapshot        │
//! │                                                                         │
//! │  close() / drop ────────► every Some → None ─────► dismissed count      │
//! │                                                                         │
//! │  NOTE: a declined call never touches any slot.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifetimes
//! `Roster<'a>` borrows the boss and, through its assignments, every hired
//! person and position for `'a`. The compiler therefore rejects dropping a
//! `Person` while a roster still holds them.
//!
//! ```rust,compile_fail
//! use staffing_core::{Person, Position, Roster, Salary};
//!
//! let boss = Person::new("Boss");
//! let dev = Position::new("Developer", Salary::new(30000));
//! let mut firm = Roster::new(&boss, 1);
//! {
//!     let ivan = Person::new("Ivan Ivanov");
//!     firm.hire(&ivan, &dev);
//! } // `ivan` dropped here while still borrowed
//! firm.fire(0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CoreResult, Decline};
use crate::salary::Salary;
use crate::types::{Assignment, Person, Position, SlotView, StaffSnapshot};
use crate::validation::validate_capacity;

// =============================================================================
// Outcomes
// =============================================================================

/// Result of [`Roster::hire`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HireOutcome {
    /// The person now occupies slot `index`.
    Hired { index: usize },
    /// Nothing changed.
    Declined { decline: Decline },
}

impl HireOutcome {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, HireOutcome::Hired { .. })
    }

    /// Slot that was filled, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            HireOutcome::Hired { index } => Some(*index),
            HireOutcome::Declined { .. } => None,
        }
    }

    pub fn decline(&self) -> Option<&Decline> {
        match self {
            HireOutcome::Hired { .. } => None,
            HireOutcome::Declined { decline } => Some(decline),
        }
    }

    /// Turns a decline into an error for callers that want `?`.
    pub fn into_result(self) -> CoreResult<usize> {
        match self {
            HireOutcome::Hired { index } => Ok(index),
            HireOutcome::Declined { decline } => Err(decline.into()),
        }
    }
}

/// Result of [`Roster::fire`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FireOutcome {
    /// Slot `index` is now vacant.
    Fired { index: usize },
    /// Nothing changed.
    Declined { decline: Decline },
}

impl FireOutcome {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, FireOutcome::Fired { .. })
    }

    pub fn decline(&self) -> Option<&Decline> {
        match self {
            FireOutcome::Fired { .. } => None,
            FireOutcome::Declined { decline } => Some(decline),
        }
    }

    pub fn into_result(self) -> CoreResult<usize> {
        match self {
            FireOutcome::Fired { index } => Ok(index),
            FireOutcome::Declined { decline } => Err(decline.into()),
        }
    }
}

// =============================================================================
// Roster
// =============================================================================

/// Fixed-capacity staff roster.
///
/// ## Invariants
/// - `slots.len()` is set once in the constructor and never changes
/// - A slot is occupied iff it holds `Some(Assignment)`
/// - Every assignment is dismissed exactly once: by `fire`, or by the
///   teardown in `close` / `Drop`
#[derive(Debug)]
pub struct Roster<'a> {
    boss: &'a Person,
    slots: Box<[Option<Assignment<'a>>]>,
    closed: bool,
}

impl<'a> Roster<'a> {
    /// Creates a roster with `capacity` vacant slots.
    ///
    /// Any capacity is accepted, including zero.
    pub fn new(boss: &'a Person, capacity: usize) -> Self {
        let slots = std::iter::repeat_with(|| None).take(capacity).collect();
        info!(boss = %boss.name(), capacity, "Employer created");
        Roster {
            boss,
            slots,
            closed: false,
        }
    }

    /// Like [`Roster::new`], but rejects capacities above
    /// [`MAX_ROSTER_CAPACITY`](crate::MAX_ROSTER_CAPACITY).
    pub fn with_validated_capacity(boss: &'a Person, capacity: usize) -> CoreResult<Self> {
        validate_capacity(capacity)?;
        Ok(Roster::new(boss, capacity))
    }

    #[inline]
    pub fn boss(&self) -> &'a Person {
        self.boss
    }

    /// Number of slots, fixed for the roster's lifetime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn vacancies(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    pub fn occupied(&self) -> usize {
        self.capacity() - self.vacancies()
    }

    /// `None` when `index` is out of range.
    pub fn is_vacant(&self, index: usize) -> Option<bool> {
        self.slots.get(index).map(Option::is_none)
    }

    /// Assignment held in slot `index`, if any.
    pub fn assignment(&self, index: usize) -> Option<&Assignment<'a>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Sum of the salaries of all occupied slots.
    pub fn payroll(&self) -> u64 {
        Salary::total(self.slots.iter().flatten().map(|a| a.what().salary()))
    }

    /// Puts `person` into the lowest-index vacant slot.
    ///
    /// ## Behavior
    /// - Scans slots in ascending order, first fit wins
    /// - No vacancy is a decline, not an error: the roster is unchanged
    pub fn hire(&mut self, person: &'a Person, position: &'a Position) -> HireOutcome {
        info!(
            person = %person.name(),
            position = %position.name(),
            "Trying to hire"
        );

        let Some(index) = self.slots.iter().position(Option::is_none) else {
            let decline = Decline::NoVacancy {
                person: person.name().to_string(),
            };
            warn!(person = %person.name(), "{decline}");
            return HireOutcome::Declined { decline };
        };

        self.slots[index] = Some(Assignment::new(person, position, index));
        info!(person = %person.name(), index, "Hired");
        HireOutcome::Hired { index }
    }

    /// Empties slot `index`.
    ///
    /// ## Behavior
    /// - `index >= capacity`: declined with `InvalidIndex`
    /// - slot already vacant: declined with `AlreadyVacant`, so repeated
    ///   fires of the same index are harmless
    pub fn fire(&mut self, index: usize) -> FireOutcome {
        info!(index, "Trying to fire position");

        let capacity = self.capacity();
        let Some(slot) = self.slots.get_mut(index) else {
            let decline = Decline::InvalidIndex { index, capacity };
            warn!(index, capacity, "{decline}");
            return FireOutcome::Declined { decline };
        };

        let Some(assignment) = slot.take() else {
            let decline = Decline::AlreadyVacant { index };
            warn!(index, "{decline}");
            return FireOutcome::Declined { decline };
        };

        assignment.dismiss();
        info!(index, "Position is now vacant");
        FireOutcome::Fired { index }
    }

    /// Detached copy of every slot, in index order.
    pub fn snapshot(&self) -> StaffSnapshot {
        let snapshot = StaffSnapshot {
            boss: self.boss.name().to_string(),
            slots: self
                .slots
                .iter()
                .enumerate()
                .map(|(index, slot)| SlotView {
                    index,
                    state: slot.as_ref().into(),
                })
                .collect(),
        };
        debug!(
            boss = %snapshot.boss,
            capacity = snapshot.capacity(),
            vacant = snapshot.vacant_count(),
            "Staff snapshot taken"
        );
        snapshot
    }

    /// Dismisses every remaining assignment and retires the roster.
    ///
    /// Returns how many assignments were still active. Dropping a roster
    /// without calling this performs the same teardown.
    pub fn close(mut self) -> usize {
        self.teardown()
    }

    /// Runs once; later calls return 0.
    fn teardown(&mut self) -> usize {
        if self.closed {
            return 0;
        }
        self.closed = true;

        info!(
            boss = %self.boss.name(),
            capacity = self.capacity(),
            "Employer deleted"
        );

        let mut dismissed = 0;
        for slot in self.slots.iter_mut() {
            if let Some(assignment) = slot.take() {
                assignment.dismiss();
                dismissed += 1;
            }
        }
        dismissed
    }
}

impl Drop for Roster<'_> {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
