//! # Staffing Demo Library
//!
//! The scripted walkthrough behind the `staffing-demo` binary.
//!
//! ## Module Organization
//! ```text
//! staffing_demo/
//! ├── lib.rs          ◄─── You are here (logging setup, walkthrough, rendering)
//! ├── config.rs       ◄─── DemoConfig from environment variables
//! └── error.rs        ◄─── AppError
//! ```
//!
//! ## Walkthrough
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Roster (capacity from config, 2 by default)                            │
//! │    hire Ivan/Developer ─► hire Petro/QA ─► hire Stepan/Developer        │
//! │    fire 0 ─► fire 0 again ─► close                                      │
//! │    a staff snapshot is taken after every step                           │
//! │                                                                         │
//! │  Calc (accumulator/operand from config, 10 and 3 by default)            │
//! │    each symbol of the program ("+^%=n") through Calc::steps             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr so stdout carries only the rendered report.

pub mod config;
pub mod error;

use serde::Serialize;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{DemoConfig, OutputFormat};
use error::AppError;
use staffing_core::{
    Calc, FireOutcome, HireOutcome, Person, Position, Roster, Salary, StaffSnapshot,
};

// =============================================================================
// Report Types
// =============================================================================

/// What one roster step did.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RosterAction {
    Open {
        boss: String,
        capacity: usize,
    },
    Hire {
        person: String,
        position: String,
        outcome: HireOutcome,
    },
    Fire {
        index: usize,
        outcome: FireOutcome,
    },
}

/// A roster action and the staff state right after it.
#[derive(Debug, Clone, Serialize)]
pub struct RosterStep {
    pub action: RosterAction,
    pub staff: StaffSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterReport {
    pub steps: Vec<RosterStep>,
    /// Salaries still being paid just before close.
    pub payroll: u64,
    /// Assignments ended by closing the roster.
    pub dismissed_on_close: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalcStep {
    pub op: char,
    pub accumulator: f64,
    pub operand: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalcReport {
    pub initial: Calc,
    pub steps: Vec<CalcStep>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub roster: RosterReport,
    pub calc: CalcReport,
}

// =============================================================================
// Entry Points
// =============================================================================

/// Runs the demo with configuration from the environment, writing to stdout.
pub fn run() -> Result<(), AppError> {
    init_tracing();

    let config = DemoConfig::load()?;
    info!(
        boss = %config.boss,
        capacity = config.capacity,
        output = ?config.output,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&config, &mut out)?;
    out.flush()?;

    info!("Demo finished");
    Ok(())
}

/// Runs both walkthroughs and renders them to `out` in the configured format.
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<DemoReport, AppError> {
    let report = DemoReport {
        roster: roster_walkthrough(config)?,
        calc: calc_walkthrough(config),
    };

    match config.output {
        OutputFormat::Text => write_text(&report, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(report)
}

/// Filter used when `RUST_LOG` is unset. `staffing` matches every crate of
/// the workspace by target prefix.
const DEFAULT_LOG_FILTER: &str = "info,staffing=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=staffing_core=warn` - Only declines from the core crate
/// - Default: INFO level, DEBUG for every `staffing*` crate (staff
///   snapshots, calc steps)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Walkthroughs
// =============================================================================

fn roster_walkthrough(config: &DemoConfig) -> Result<RosterReport, AppError> {
    let boss = Person::try_new(config.boss.as_str())?;
    let ivan = Person::new("Ivan Ivanov");
    let petro = Person::new("Petro Petrov");
    let stepan = Person::new("Stepan Stepanych");

    let dev = Position::new("Developer", Salary::new(30000));
    let qa = Position::new("QA Engineer", Salary::new(25000));

    let mut firm = Roster::with_validated_capacity(&boss, config.capacity)?;
    let mut steps = vec![RosterStep {
        action: RosterAction::Open {
            boss: boss.name().to_string(),
            capacity: firm.capacity(),
        },
        staff: firm.snapshot(),
    }];

    for (person, position) in [(&ivan, &dev), (&petro, &qa), (&stepan, &dev)] {
        let outcome = firm.hire(person, position);
        steps.push(RosterStep {
            action: RosterAction::Hire {
                person: person.name().to_string(),
                position: position.name().to_string(),
                outcome,
            },
            staff: firm.snapshot(),
        });
    }

    // The second fire of slot 0 is declined.
    for index in [0, 0] {
        let outcome = firm.fire(index);
        steps.push(RosterStep {
            action: RosterAction::Fire { index, outcome },
            staff: firm.snapshot(),
        });
    }

    let payroll = firm.payroll();
    let dismissed_on_close = firm.close();

    Ok(RosterReport {
        steps,
        payroll,
        dismissed_on_close,
    })
}

fn calc_walkthrough(config: &DemoConfig) -> CalcReport {
    let initial = Calc::new(config.accumulator, config.operand);
    let mut calc = initial;

    let steps = calc
        .steps(&config.program)
        .map(|(op, state)| CalcStep {
            op,
            accumulator: state.accumulator,
            operand: state.operand,
        })
        .collect();

    CalcReport { initial, steps }
}

// =============================================================================
// Text Rendering
// =============================================================================

fn write_text<W: Write>(report: &DemoReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== Roster: hire and fire ===")?;
    for step in &report.roster.steps {
        writeln!(out)?;
        match &step.action {
            RosterAction::Open { boss, capacity } => {
                writeln!(out, "Employer {boss} opens {capacity} positions")?;
            }
            RosterAction::Hire {
                person,
                position,
                outcome,
            } => match outcome {
                HireOutcome::Hired { index } => {
                    writeln!(out, "Hired {person} as {position} on position index {index}")?
                }
                HireOutcome::Declined { decline } => {
                    writeln!(out, "Hiring {person} declined: {decline}")?
                }
            },
            RosterAction::Fire { index, outcome } => match outcome {
                FireOutcome::Fired { index } => writeln!(out, "Position {index} is now vacant")?,
                FireOutcome::Declined { decline } => {
                    writeln!(out, "Firing position {index} declined: {decline}")?
                }
            },
        }
        writeln!(out, "{}", step.staff)?;
    }
    writeln!(out)?;
    writeln!(out, "Payroll before close: {}", report.roster.payroll)?;
    writeln!(
        out,
        "Dismissed on close: {}",
        report.roster.dismissed_on_close
    )?;

    writeln!(out)?;
    writeln!(out, "=== Calc ===")?;
    let initial = report.calc.initial;
    writeln!(
        out,
        "Initial: a = {}, x = {}",
        initial.accumulator, initial.operand
    )?;
    for step in &report.calc.steps {
        writeln!(
            out,
            "After '{}': a = {}, x = {}",
            step.op, step.accumulator, step.operand
        )?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
