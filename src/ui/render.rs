//! Render commands → display operations.

use super::CharDisplay;
use crate::calc::RenderCommand;
use crate::config::{BANNER_TEXT, LABEL_ROW, PROMPT_TEXT, RESULT_TEXT, VALUE_ROW};

/// Carry out one render command.
pub fn render<D>(display: &mut D, command: &RenderCommand) -> Result<(), D::Error>
where
    D: CharDisplay + ?Sized,
{
    match *command {
        RenderCommand::Prompt => show_label(display, PROMPT_TEXT),
        RenderCommand::EchoDigit(digit) => {
            let mut buf = [0u8; 4];
            display.write_text(digit.symbol().encode_utf8(&mut buf))
        }
        RenderCommand::EchoOperator(op) => display.write_text(op.padded()),
        RenderCommand::Result(value) => {
            show_label(display, RESULT_TEXT)?;
            display.write_number(value)
        }
        RenderCommand::Error(e) => {
            show_label(display, RESULT_TEXT)?;
            display.write_text(e.message())
        }
    }
}

/// Startup banner on the label row.
pub fn show_banner<D>(display: &mut D) -> Result<(), D::Error>
where
    D: CharDisplay + ?Sized,
{
    display.clear()?;
    display.move_cursor(LABEL_ROW, 0)?;
    display.write_text(BANNER_TEXT)
}

/// Clear, write `label` on the label row, park the cursor on the value row.
fn show_label<D>(display: &mut D, label: &str) -> Result<(), D::Error>
where
    D: CharDisplay + ?Sized,
{
    display.clear()?;
    display.move_cursor(LABEL_ROW, 0)?;
    display.write_text(label)?;
    display.move_cursor(VALUE_ROW, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{CalcError, Operator, Value};
    use crate::keypad::Digit;
    use crate::ui::CharGrid;
    use core::convert::Infallible;

    /// Records the exact operation sequence.
    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Move(u8, u8),
        Text(String),
        Number(Value),
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl CharDisplay for Recorder {
        type Error = Infallible;

        fn clear(&mut self) -> Result<(), Self::Error> {
            self.0.push(Op::Clear);
            Ok(())
        }

        fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error> {
            self.0.push(Op::Move(row, col));
            Ok(())
        }

        fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
            self.0.push(Op::Text(text.into()));
            Ok(())
        }

        fn write_number(&mut self, value: Value) -> Result<(), Self::Error> {
            self.0.push(Op::Number(value));
            Ok(())
        }
    }

    fn ops(command: RenderCommand) -> Vec<Op> {
        let mut rec = Recorder::default();
        render(&mut rec, &command).unwrap();
        rec.0
    }

    #[test]
    fn prompt_sequence() {
        assert_eq!(
            ops(RenderCommand::Prompt),
            vec![Op::Clear, Op::Move(0, 0), Op::Text("Enter:".into()), Op::Move(1, 0)]
        );
    }

    #[test]
    fn echo_digit_writes_one_character() {
        let digit = Digit::new(3).unwrap();
        assert_eq!(ops(RenderCommand::EchoDigit(digit)), vec![Op::Text("3".into())]);
    }

    #[test]
    fn echo_operator_is_padded() {
        assert_eq!(
            ops(RenderCommand::EchoOperator(Operator::Div)),
            vec![Op::Text(" / ".into())]
        );
    }

    #[test]
    fn result_sequence() {
        assert_eq!(
            ops(RenderCommand::Result(-12)),
            vec![
                Op::Clear,
                Op::Move(0, 0),
                Op::Text("Result:".into()),
                Op::Move(1, 0),
                Op::Number(-12),
            ]
        );
    }

    #[test]
    fn division_error_sequence() {
        assert_eq!(
            ops(RenderCommand::Error(CalcError::DivisionByZero)),
            vec![
                Op::Clear,
                Op::Move(0, 0),
                Op::Text("Result:".into()),
                Op::Move(1, 0),
                Op::Text("Error: /0".into()),
            ]
        );
    }

    #[test]
    fn banner_on_label_row() {
        let mut grid: CharGrid = CharGrid::new();
        show_banner(&mut grid).unwrap();
        assert_eq!(grid.row_text(0), "nRF52840 Calc");
        assert_eq!(grid.row_text(1), "");
    }

    #[test]
    fn overflow_error_on_grid() {
        let mut grid: CharGrid = CharGrid::new();
        render(&mut grid, &RenderCommand::Error(CalcError::Overflow)).unwrap();
        assert_eq!(grid.row_text(0), "Result:");
        assert_eq!(grid.row_text(1), "Error: OVF");
    }
}
