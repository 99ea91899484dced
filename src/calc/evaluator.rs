//! Integer arithmetic for a single pending operator.
//!
//! All operations are checked: a result outside the `i32` range is reported
//! as [`CalcError::Overflow`] instead of wrapping.

use crate::config::{DIV_ZERO_TEXT, OVERFLOW_TEXT};

/// Operand and result type.
pub type Value = i32;

/// Outcome of one evaluation. `Err(DivisionByZero)` carries no value; the
/// state machine treats it as zero.
pub type EvaluationResult = Result<Value, CalcError>;

/// The four operator keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Echo text with a space on each side, as shown after the first operand.
    pub const fn padded(self) -> &'static str {
        match self {
            Self::Add => " + ",
            Self::Sub => " - ",
            Self::Mul => " * ",
            Self::Div => " / ",
        }
    }
}

/// Evaluation failures. Both are recovered locally by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalcError {
    /// Right-hand operand of `/` was zero.
    DivisionByZero,
    /// The exact result does not fit in a [`Value`].
    Overflow,
}

impl CalcError {
    /// Text shown on the value row.
    pub const fn message(self) -> &'static str {
        match self {
            Self::DivisionByZero => DIV_ZERO_TEXT,
            Self::Overflow => OVERFLOW_TEXT,
        }
    }
}

/// Apply `op` to `a` and `b`.
///
/// Division truncates toward zero.
pub fn evaluate(a: Value, b: Value, op: Operator) -> EvaluationResult {
    let result = match op {
        Operator::Add => a.checked_add(b),
        Operator::Sub => a.checked_sub(b),
        Operator::Mul => a.checked_mul(b),
        Operator::Div => {
            if b == 0 {
                return Err(CalcError::DivisionByZero);
            }
            // Only i32::MIN / -1 can fail here.
            a.checked_div(b)
        }
    };
    result.ok_or(CalcError::Overflow)
}
