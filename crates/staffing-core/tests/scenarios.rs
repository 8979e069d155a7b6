//! End-to-end scenarios for the roster and the calculator, including the
//! lifecycle events they report through `tracing`.

use std::fmt;
use std::sync::{Arc, Mutex};

use staffing_core::{
    Calc, Decline, FireOutcome, HireOutcome, Opcode, Person, Position, Roster, Salary, SlotState,
};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

// =============================================================================
// Event Capture
// =============================================================================

/// Collects the message of every event emitted while installed.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<String>>>);

impl Capture {
    fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn count(&self, message: &str) -> usize {
        self.messages().iter().filter(|m| *m == message).count()
    }
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.0.lock().unwrap().push(message);
        }
    }
}

fn captured<T>(f: impl FnOnce() -> T) -> (T, Capture) {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture)
}

// =============================================================================
// Roster Scenarios
// =============================================================================

#[test]
fn hire_and_fire_walkthrough() {
    let boss = Person::new("Boss");
    let ivan = Person::new("Ivan Ivanov");
    let petro = Person::new("Petro Petrov");
    let stepan = Person::new("Stepan Stepanych");
    let dev = Position::new("Developer", Salary::new(30000));
    let qa = Position::new("QA Engineer", Salary::new(25000));

    let mut firm = Roster::new(&boss, 2);
    assert_eq!(firm.snapshot().vacant_count(), 2);

    assert_eq!(firm.hire(&ivan, &dev), HireOutcome::Hired { index: 0 });
    assert_eq!(firm.hire(&petro, &qa), HireOutcome::Hired { index: 1 });

    let full = firm.snapshot();
    assert_eq!(
        firm.hire(&stepan, &dev),
        HireOutcome::Declined {
            decline: Decline::NoVacancy {
                person: "Stepan Stepanych".to_string()
            }
        }
    );
    assert_eq!(firm.snapshot(), full);

    assert_eq!(firm.fire(0), FireOutcome::Fired { index: 0 });
    let after_fire = firm.snapshot();
    assert!(after_fire.get(0).unwrap().is_vacant());
    match after_fire.get(1).unwrap() {
        SlotState::Occupied {
            person, salary, ..
        } => {
            assert_eq!(person, "Petro Petrov");
            assert_eq!(*salary, Salary::new(25000));
        }
        SlotState::Vacant => panic!("slot 1 should still be occupied"),
    }

    assert_eq!(
        firm.fire(0),
        FireOutcome::Declined {
            decline: Decline::AlreadyVacant { index: 0 }
        }
    );
    assert_eq!(firm.snapshot(), after_fire);

    assert_eq!(firm.close(), 1);
}

#[test]
fn snapshot_outlives_roster() {
    let boss = Person::new("Boss");
    let ivan = Person::new("Ivan Ivanov");
    let dev = Position::new("Developer", Salary::new(30000));

    let snapshot = {
        let mut firm = Roster::new(&boss, 2);
        firm.hire(&ivan, &dev);
        firm.snapshot()
    };

    assert_eq!(snapshot.boss, "Boss");
    assert_eq!(snapshot.occupied_count(), 1);
    assert_eq!(
        snapshot.to_string().lines().nth(1),
        Some("Position index 0: OCCUPIED by Ivan Ivanov (Developer, salary 30000)")
    );
}

#[test]
fn lifecycle_events_are_reported() {
    let ((), capture) = captured(|| {
        let boss = Person::new("Boss");
        let ivan = Person::new("Ivan Ivanov");
        let petro = Person::new("Petro Petrov");
        let dev = Position::new("Developer", Salary::new(30000));

        let mut firm = Roster::new(&boss, 1);
        firm.hire(&ivan, &dev);
        firm.hire(&petro, &dev);
        firm.fire(3);
        firm.close();
    });

    let messages = capture.messages();
    assert_eq!(capture.count("Person created"), 3);
    assert_eq!(capture.count("Position created"), 1);
    assert_eq!(capture.count("Employee takes position"), 1);
    assert_eq!(capture.count("No vacant positions for Petro Petrov"), 1);
    assert_eq!(capture.count("Invalid position index: 3 (capacity 1)"), 1);

    // Teardown: the employer goes first, then its remaining employee.
    let deleted = messages.iter().position(|m| m == "Employer deleted").unwrap();
    let fired = messages
        .iter()
        .position(|m| m == "Employee fired from position")
        .unwrap();
    assert!(deleted < fired);
    assert_eq!(capture.count("Employee fired from position"), 1);

    // People and positions outlive the roster and go last.
    assert_eq!(capture.count("Person destroyed"), 3);
    assert_eq!(capture.count("Position destroyed"), 1);
    let position_gone = messages
        .iter()
        .position(|m| m == "Position destroyed")
        .unwrap();
    assert!(fired < position_gone);
    assert_eq!(messages.last().map(String::as_str), Some("Person destroyed"));
}

#[test]
fn person_and_position_report_destruction() {
    let ((), capture) = captured(|| {
        let ivan = Person::new("Ivan Ivanov");
        let dev = Position::new("Developer", Salary::new(30000));
        drop(ivan);
        drop(dev);
    });

    assert_eq!(
        capture.messages(),
        [
            "Person created",
            "Position created",
            "Person destroyed",
            "Position destroyed",
        ]
    );
}

#[test]
fn dropping_roster_dismisses_each_assignment_once() {
    let ((), capture) = captured(|| {
        let boss = Person::new("Boss");
        let ivan = Person::new("Ivan Ivanov");
        let petro = Person::new("Petro Petrov");
        let dev = Position::new("Developer", Salary::new(30000));

        let mut firm = Roster::new(&boss, 3);
        firm.hire(&ivan, &dev);
        firm.hire(&petro, &dev);
        firm.fire(1);
        // Dropped without close().
    });

    assert_eq!(capture.count("Employer deleted"), 1);
    assert_eq!(capture.count("Employee fired from position"), 2);
}

// =============================================================================
// Calc Scenarios
// =============================================================================

#[test]
fn calc_walkthrough() {
    let mut c = Calc::new(10.0, 3.0);

    assert_eq!(c.exe('+'), 13.0);
    assert_eq!(c.exe('^'), 2197.0);
    assert_eq!(c.exe('%'), 1.0);
    assert_eq!(c.exe('='), 3.0);
    assert_eq!(c.exe('n'), 3.0);
    assert_eq!(c, Calc::new(3.0, -3.0));
}

#[test]
fn calc_declines_are_reported() {
    let (state, capture) = captured(|| {
        let mut c = Calc::new(5.0, 0.0);
        c.apply(Opcode::Div);
        c.apply(Opcode::Mod);
        c.exe('x');
        c
    });

    assert_eq!(state, Calc::new(5.0, 0.0));
    assert_eq!(capture.count("Division by zero"), 1);
    assert_eq!(capture.count("Modulo by zero"), 1);
    assert_eq!(capture.count("Unknown operation: x"), 1);
}
