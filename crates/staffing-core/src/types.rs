//! # Domain Types
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │     Person      │   │    Position     │   owned by the caller       │
//! │  │  id (UUID)      │   │  name           │                             │
//! │  │  name           │   │  salary         │                             │
//! │  └────────▲────────┘   └────────▲────────┘                             │
//! │           │ &'a                  │ &'a                                  │
//! │  ┌────────┴──────────────────────┴────────┐                            │
//! │  │            Assignment<'a>              │   owned by a roster slot   │
//! │  │  who, what, index, hired_at            │                            │
//! │  └────────────────────────────────────────┘                            │
//! │                                                                         │
//! │  ┌────────────────────────────────────────┐                            │
//! │  │  StaffSnapshot → Vec<SlotView>         │   detached, serializable   │
//! │  │  SlotState::{Vacant, Occupied{..}}     │                            │
//! │  └────────────────────────────────────────┘                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! A `Person` has a UUID `id` and a display `name`. Names may repeat; ids
//! do not.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::salary::Salary;
use crate::validation::validate_name;

// =============================================================================
// Person
// =============================================================================

/// Someone who can be hired, or who runs a roster.
///
/// Not `Clone`: every person reports its own creation and destruction.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: Uuid,
    name: String,
}

impl Person {
    /// Creates a person with a fresh UUID v4.
    pub fn new(name: impl Into<String>) -> Self {
        let person = Person {
            id: Uuid::new_v4(),
            name: name.into(),
        };
        info!(person = %person.name, id = %person.id, "Person created");
        person
    }

    /// Like [`Person::new`], but rejects blank or oversized names.
    pub fn try_new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        validate_name("person name", &name)?;
        Ok(Person::new(name))
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for Person {
    fn drop(&mut self) {
        info!(person = %self.name, id = %self.id, "Person destroyed");
    }
}

// =============================================================================
// Position
// =============================================================================

/// A named role with a salary.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    name: String,
    salary: Salary,
}

impl Position {
    pub fn new(name: impl Into<String>, salary: Salary) -> Self {
        let position = Position {
            name: name.into(),
            salary,
        };
        info!(
            position = %position.name,
            salary = position.salary.amount(),
            "Position created"
        );
        position
    }

    /// Like [`Position::new`], but rejects blank or oversized names.
    pub fn try_new(name: impl Into<String>, salary: Salary) -> CoreResult<Self> {
        let name = name.into();
        validate_name("position name", &name)?;
        Ok(Position::new(name, salary))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn salary(&self) -> Salary {
        self.salary
    }
}

impl Drop for Position {
    fn drop(&mut self) {
        info!(
            position = %self.name,
            salary = self.salary.amount(),
            "Position destroyed"
        );
    }
}

// =============================================================================
// Assignment
// =============================================================================

/// "This person currently holds this position" in one roster slot.
///
/// Only a [`Roster`](crate::Roster) creates or destroys assignments. The
/// borrows guarantee the person and position outlive it.
#[derive(Debug)]
pub struct Assignment<'a> {
    who: &'a Person,
    what: &'a Position,
    index: usize,
    hired_at: DateTime<Utc>,
}

impl<'a> Assignment<'a> {
    pub(crate) fn new(who: &'a Person, what: &'a Position, index: usize) -> Self {
        info!(
            person = %who.name(),
            position = %what.name(),
            index,
            "Employee takes position"
        );
        Assignment {
            who,
            what,
            index,
            hired_at: Utc::now(),
        }
    }

    /// Ends the assignment. Consumes it so it cannot be dismissed twice.
    pub(crate) fn dismiss(self) {
        info!(
            person = %self.who.name(),
            position = %self.what.name(),
            index = self.index,
            "Employee fired from position"
        );
    }

    #[inline]
    pub fn who(&self) -> &'a Person {
        self.who
    }

    #[inline]
    pub fn what(&self) -> &'a Position {
        self.what
    }

    /// Slot index this assignment lives in.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn hired_at(&self) -> DateTime<Utc> {
        self.hired_at
    }
}

// =============================================================================
// Snapshot Types
// =============================================================================

/// State of one slot as seen by a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SlotState {
    Vacant,
    Occupied {
        person: String,
        position: String,
        salary: Salary,
        hired_at: DateTime<Utc>,
    },
}

impl SlotState {
    #[inline]
    pub fn is_vacant(&self) -> bool {
        matches!(self, SlotState::Vacant)
    }
}

impl From<Option<&Assignment<'_>>> for SlotState {
    fn from(slot: Option<&Assignment<'_>>) -> Self {
        match slot {
            None => SlotState::Vacant,
            Some(a) => SlotState::Occupied {
                person: a.who().name().to_string(),
                position: a.what().name().to_string(),
                salary: a.what().salary(),
                hired_at: a.hired_at(),
            },
        }
    }
}

/// One line of a [`StaffSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotView {
    pub index: usize,
    #[serde(flatten)]
    pub state: SlotState,
}

impl fmt::Display for SlotView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position index {}: ", self.index)?;
        match &self.state {
            SlotState::Vacant => write!(f, "VACANT"),
            SlotState::Occupied {
                person,
                position,
                salary,
                ..
            } => write!(f, "OCCUPIED by {person} ({position}, salary {salary})"),
        }
    }
}

/// Point-in-time copy of every roster slot, in index order.
///
/// Owns its strings, so it stays valid after the roster changes or closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffSnapshot {
    pub boss: String,
    pub slots: Vec<SlotView>,
}

impl StaffSnapshot {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn vacant_count(&self) -> usize {
        self.slots.iter().filter(|s| s.state.is_vacant()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.capacity() - self.vacant_count()
    }

    pub fn get(&self, index: usize) -> Option<&SlotState> {
        self.slots.get(index).map(|s| &s.state)
    }
}

impl fmt::Display for StaffSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== STAFF STATE ===")?;
        for slot in &self.slots {
            writeln!(f, "{slot}")?;
        }
        write!(f, "===================")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
