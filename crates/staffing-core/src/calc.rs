//! # Calc
//!
//! Accumulator/operand calculator driven by single-character opcodes.
//!
//! ## Opcode Table
//! ```text
//! ┌────────┬─────────────────┬──────────────────────────┬────────────────────┐
//! │ symbol │ Opcode          │ effect                   │ declined when      │
//! ├────────┼─────────────────┼──────────────────────────┼────────────────────┤
//! │   +    │ Add             │ acc += x                 │                    │
//! │   -    │ Sub             │ acc -= x                 │                    │
//! │   *    │ Mul             │ acc *= x                 │                    │
//! │   /    │ Div             │ acc /= x                 │ x == 0             │
//! │   ^    │ Pow             │ acc = acc.powf(x)        │                    │
//! │   %    │ Mod             │ acc = acc % x (fmod)     │ x == 0             │
//! │   =    │ Assign          │ acc = x                  │                    │
//! │   n    │ NegateOperand   │ x = -x                   │                    │
//! │ other  │ -               │ -                        │ always             │
//! └────────┴─────────────────┴──────────────────────────┴────────────────────┘
//! ```
//!
//! A declined step leaves both fields untouched.
//!
//! ## Usage
//! ```rust
//! use staffing_core::calc::{Calc, Opcode};
//!
//! let mut calc = Calc::new(10.0, 3.0);
//! assert_eq!(calc.apply(Opcode::Add), 13.0);
//! assert_eq!(calc.exe('^'), 2197.0);
//! assert_eq!(calc.run("%=n"), 3.0);
//! assert_eq!(calc.operand, -3.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::Decline;

// =============================================================================
// Opcode
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
    Assign,
    /// Flips the operand's sign; the accumulator is untouched.
    NegateOperand,
}

impl Opcode {
    pub const ALL: [Opcode; 8] = [
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::Pow,
        Opcode::Mod,
        Opcode::Assign,
        Opcode::NegateOperand,
    ];

    /// The character this opcode is written as.
    pub const fn symbol(self) -> char {
        match self {
            Opcode::Add => '+',
            Opcode::Sub => '-',
            Opcode::Mul => '*',
            Opcode::Div => '/',
            Opcode::Pow => '^',
            Opcode::Mod => '%',
            Opcode::Assign => '=',
            Opcode::NegateOperand => 'n',
        }
    }
}

impl TryFrom<char> for Opcode {
    type Error = Decline;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            '+' => Opcode::Add,
            '-' => Opcode::Sub,
            '*' => Opcode::Mul,
            '/' => Opcode::Div,
            '^' => Opcode::Pow,
            '%' => Opcode::Mod,
            '=' => Opcode::Assign,
            'n' => Opcode::NegateOperand,
            op => return Err(Decline::UnknownOperation { op }),
        })
    }
}

impl FromStr for Opcode {
    type Err = Decline;

    /// Accepts exactly one symbol character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Opcode::try_from(c),
            (Some(c), Some(_)) => Err(Decline::UnknownOperation { op: c }),
            (None, _) => Err(Decline::MissingOperation),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// =============================================================================
// Calc
// =============================================================================

/// Two-field calculator state. No history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Calc {
    pub accumulator: f64,
    pub operand: f64,
}

impl Calc {
    pub const fn new(accumulator: f64, operand: f64) -> Self {
        Calc {
            accumulator,
            operand,
        }
    }

    /// Applies `op` and returns the resulting accumulator.
    ///
    /// Declines are logged at `warn` and leave the state as it was; use
    /// [`Calc::try_apply`] to observe them.
    pub fn apply(&mut self, op: Opcode) -> f64 {
        self.try_apply(op).unwrap_or_else(|decline| {
            warn!(op = %op, operand = self.operand, "{decline}");
            self.accumulator
        })
    }

    /// Applies `op`, or returns the reason it was declined.
    pub fn try_apply(&mut self, op: Opcode) -> Result<f64, Decline> {
        let x = self.operand;
        match op {
            Opcode::Add => self.accumulator += x,
            Opcode::Sub => self.accumulator -= x,
            Opcode::Mul => self.accumulator *= x,
            Opcode::Div => {
                if x == 0.0 {
                    return Err(Decline::DivisionByZero);
                }
                self.accumulator /= x;
            }
            Opcode::Pow => self.accumulator = self.accumulator.powf(x),
            Opcode::Mod => {
                if x == 0.0 {
                    return Err(Decline::ModuloByZero);
                }
                // Rust's `%` on floats truncates like C's fmod.
                self.accumulator %= x;
            }
            Opcode::Assign => self.accumulator = x,
            Opcode::NegateOperand => self.operand = -x,
        }
        debug!(
            op = %op,
            accumulator = self.accumulator,
            operand = self.operand,
            "Calc step applied"
        );
        Ok(self.accumulator)
    }

    /// Character-coded entry point. Unknown symbols are declined.
    pub fn exe(&mut self, code: char) -> f64 {
        match Opcode::try_from(code) {
            Ok(op) => self.apply(op),
            Err(decline) => {
                warn!(op = %code, "{decline}");
                self.accumulator
            }
        }
    }

    /// Feeds each non-whitespace character of `program` to [`Calc::exe`]
    /// lazily, yielding the symbol and the state right after it.
    pub fn steps<'s>(&'s mut self, program: &'s str) -> impl Iterator<Item = (char, Calc)> + 's {
        program
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(move |c| {
                self.exe(c);
                (c, *self)
            })
    }

    /// Runs the whole of `program` through [`Calc::steps`] and returns the
    /// final accumulator.
    pub fn run(&mut self, program: &str) -> f64 {
        self.steps(program).for_each(drop);
        self.accumulator
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_mapping_is_total() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::try_from(op.symbol()), Ok(op));
            assert_eq!(op.to_string().parse::<Opcode>(), Ok(op));
        }
        assert_eq!(
            Opcode::try_from('x'),
            Err(Decline::UnknownOperation { op: 'x' })
        );
        assert_eq!("".parse::<Opcode>(), Err(Decline::MissingOperation));
        assert!("++".parse::<Opcode>().is_err());
    }

    #[test]
    fn test_basic_arithmetic() {
        let cases = [
            (Opcode::Add, 13.0),
            (Opcode::Sub, 7.0),
            (Opcode::Mul, 30.0),
            (Opcode::Pow, 1000.0),
            (Opcode::Mod, 1.0),
            (Opcode::Assign, 3.0),
        ];
        for (op, expected) in cases {
            let mut calc = Calc::new(10.0, 3.0);
            assert_eq!(calc.apply(op), expected, "op {op}");
            assert_eq!(calc.operand, 3.0);
        }

        let mut calc = Calc::new(10.0, 4.0);
        assert_eq!(calc.apply(Opcode::Div), 2.5);
    }

    #[test]
    fn test_negate_operand_keeps_accumulator() {
        let mut calc = Calc::new(3.0, 3.0);
        assert_eq!(calc.apply(Opcode::NegateOperand), 3.0);
        assert_eq!(calc.operand, -3.0);
        calc.apply(Opcode::NegateOperand);
        assert_eq!(calc.operand, 3.0);
    }

    #[test]
    fn test_division_by_zero_is_declined() {
        let mut calc = Calc::new(0.1 + 0.2, 0.0);
        let bits = calc.accumulator.to_bits();

        assert_eq!(calc.try_apply(Opcode::Div), Err(Decline::DivisionByZero));
        assert_eq!(calc.apply(Opcode::Div).to_bits(), bits);
        assert_eq!(calc.accumulator.to_bits(), bits);

        // Negative zero compares equal to zero.
        calc.operand = -0.0;
        assert_eq!(calc.try_apply(Opcode::Div), Err(Decline::DivisionByZero));
    }

    #[test]
    fn test_modulo_by_zero_is_declined() {
        let mut calc = Calc::new(-7.25, 0.0);
        let bits = calc.accumulator.to_bits();

        assert_eq!(calc.try_apply(Opcode::Mod), Err(Decline::ModuloByZero));
        assert_eq!(calc.apply(Opcode::Mod).to_bits(), bits);
    }

    #[test]
    fn test_modulo_keeps_sign_of_dividend() {
        let mut calc = Calc::new(-7.0, 3.0);
        assert_eq!(calc.apply(Opcode::Mod), -1.0);

        let mut calc = Calc::new(7.5, -2.0);
        assert_eq!(calc.apply(Opcode::Mod), 1.5);
    }

    #[test]
    fn test_pow_fractional_and_negative() {
        let mut calc = Calc::new(16.0, 0.5);
        assert_eq!(calc.apply(Opcode::Pow), 4.0);

        let mut calc = Calc::new(2.0, -1.0);
        assert_eq!(calc.apply(Opcode::Pow), 0.5);

        let mut calc = Calc::new(-8.0, 1.0 / 3.0);
        assert!(calc.apply(Opcode::Pow).is_nan());
    }

    #[test]
    fn test_unknown_symbol_leaves_state() {
        let mut calc = Calc::new(10.0, 3.0);
        assert_eq!(calc.exe('?'), 10.0);
        assert_eq!(calc, Calc::new(10.0, 3.0));
    }

    #[test]
    fn test_apply_is_deterministic() {
        for op in Opcode::ALL {
            let mut a = Calc::new(5.5, -2.0);
            let mut b = Calc::new(5.5, -2.0);
            assert_eq!(a.apply(op).to_bits(), b.apply(op).to_bits());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_run_program() {
        let mut calc = Calc::new(10.0, 3.0);
        assert_eq!(calc.run("+ ^ % = n"), 3.0);
        assert_eq!(calc, Calc::new(3.0, -3.0));

        let mut calc = Calc::new(1.0, 2.0);
        assert_eq!(calc.run(""), 1.0);
        assert_eq!(calc.run("+?+"), 5.0);
    }

    #[test]
    fn test_steps_yield_state_after_each_symbol() {
        let mut calc = Calc::new(10.0, 3.0);
        let steps: Vec<(char, Calc)> = calc.steps(" + n ?").collect();

        assert_eq!(
            steps,
            vec![
                ('+', Calc::new(13.0, 3.0)),
                ('n', Calc::new(13.0, -3.0)),
                ('?', Calc::new(13.0, -3.0)),
            ]
        );
        assert_eq!(calc, Calc::new(13.0, -3.0));
    }
}
