//! Calculator state machine.
//!
//! The state is a plain `Copy` value. [`apply`] consumes one key and returns
//! the next state together with what the display should do about it; it has
//! no side effects of its own.
//!
//! ## States
//!
//! - **First operand**: no operator pending, digits go to `operand1`
//! - **Second operand**: operator pending, digits go to `operand2`
//! - **Result**: just evaluated, digits ignored until an operator or `C`
//!
//! Keys that make no sense in the current state (a second operator, `=`
//! without an operator, a digit on a result) are ignored silently.

pub mod evaluator;


pub use evaluator::{evaluate, CalcError, EvaluationResult, Operator, Value};

use crate::keypad::{Digit, LogicalKey};

/// Accumulated operands and pending operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalculatorState {
    /// Digits entered before the operator, or the previous result.
    pub operand1: Value,
    /// Digits entered after the operator.
    pub operand2: Value,
    /// At most one operator waits for `=`.
    pub pending_operator: Option<Operator>,
    /// The last evaluation failed.
    pub error: bool,
    /// A result is on the display and no operator has followed it yet.
    pub showing_result: bool,
}

impl CalculatorState {
    /// The canonical reset state.
    pub const fn new() -> Self {
        Self {
            operand1: 0,
            operand2: 0,
            pending_operator: None,
            error: false,
            showing_result: false,
        }
    }

    /// The operand digits are currently appended to.
    pub fn current_operand(&self) -> Value {
        if self.pending_operator.is_some() {
            self.operand2
        } else {
            self.operand1
        }
    }
}

/// What the display should show after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderCommand {
    /// Clear and show the `Enter:` prompt, cursor on the value row.
    Prompt,
    /// Append one digit at the cursor.
    EchoDigit(Digit),
    /// Append the operator with a space on each side.
    EchoOperator(Operator),
    /// Clear and show `Result:` with the value below.
    Result(Value),
    /// Clear and show `Result:` with the error message below.
    Error(CalcError),
}

/// Feed one key into the state machine.
///
/// Returns the new state and, unless the key was ignored, the render command
/// describing the change.
pub fn apply(state: CalculatorState, key: LogicalKey) -> (CalculatorState, Option<RenderCommand>) {
    match key {
        LogicalKey::Clear => (CalculatorState::new(), Some(RenderCommand::Prompt)),
        LogicalKey::Digit(digit) => enter_digit(state, digit),
        LogicalKey::Operator(op) => choose_operator(state, op),
        LogicalKey::Equals => equals(state),
    }
}

fn enter_digit(state: CalculatorState, digit: Digit) -> (CalculatorState, Option<RenderCommand>) {
    if state.showing_result {
        return (state, None);
    }

    let Some(value) = append_digit(state.current_operand(), digit) else {
        warn!("Calc: operand full, digit {} dropped", digit.value());
        return (state, None);
    };

    let mut next = state;
    if next.pending_operator.is_some() {
        next.operand2 = value;
    } else {
        next.operand1 = value;
    }
    (next, Some(RenderCommand::EchoDigit(digit)))
}

fn choose_operator(state: CalculatorState, op: Operator) -> (CalculatorState, Option<RenderCommand>) {
    // First operator wins.
    if state.pending_operator.is_some() {
        return (state, None);
    }

    let next = CalculatorState {
        pending_operator: Some(op),
        showing_result: false,
        ..state
    };
    (next, Some(RenderCommand::EchoOperator(op)))
}

fn equals(state: CalculatorState) -> (CalculatorState, Option<RenderCommand>) {
    let Some(op) = state.pending_operator else {
        return (state, None);
    };

    let result = evaluate(state.operand1, state.operand2, op);
    let next = CalculatorState {
        operand1: result.unwrap_or(0),
        operand2: 0,
        pending_operator: None,
        error: result.is_err(),
        showing_result: true,
    };

    let command = match result {
        Ok(value) => {
            debug!("Calc: {} {} {} = {}", state.operand1, op.symbol(), state.operand2, value);
            RenderCommand::Result(value)
        }
        Err(e) => {
            info!("Calc: {} {} {} failed: {}", state.operand1, op.symbol(), state.operand2, e);
            RenderCommand::Error(e)
        }
    };
    (next, Some(command))
}

/// `operand * 10 + digit`, or `None` if that no longer fits.
fn append_digit(operand: Value, digit: Digit) -> Option<Value> {
    operand
        .checked_mul(10)?
        .checked_add(Value::from(digit.value()))
}
