//! The calculator session: a text buffer and the rules to edit and evaluate
//! it.
//!
//! ```
//! use keypad::{Engine, Function, Input, Operator};
//!
//! let mut engine = Engine::new();
//! engine.append(Input::Digit(2));
//! engine.append(Input::Operator(Operator::Plus));
//! engine.append(Input::Digit(3));
//! engine.evaluate();
//! assert_eq!(engine.display(), "5");
//!
//! engine.apply_unary(Function::Percent);
//! assert_eq!(engine.display(), "0.05");
//! ```

use crate::config::Config;
use crate::error::Error;
use crate::expr::{eval, has_division_by_zero, PI_TEXT};
use crate::format::{round_to_precision, to_display};
use crate::function::Function;
use std::fmt::{self, Display, Formatter};

/// Text shown while the buffer holds a failed evaluation
pub const ERROR_TEXT: &str = "Error";

/// Operators that can be typed in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, the remainder
    Rem,
    /// `^`
    Exp,
}

impl Operator {
    /// The character written in the buffer for this operator
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
            Self::Exp => '^',
        }
    }

    /// Get the operator written as `c` in a buffer
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Rem),
            '^' => Some(Self::Exp),
            _ => None,
        }
    }
}

/// A token appended to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A decimal digit, `0..=9`
    Digit(u8),
    /// The decimal separator
    Dot,
    /// The decimal value of π
    Pi,
    /// A binary operator, or a leading minus
    Operator(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Input {
    fn starts_number(self) -> bool {
        matches!(self, Self::Digit(_) | Self::Dot | Self::Pi)
    }

    fn push_to(self, buffer: &mut String) {
        match self {
            // Out of range digits are not written
            Self::Digit(digit) => {
                if let Some(c) = std::char::from_digit(u32::from(digit), 10) {
                    buffer.push(c);
                }
            }
            Self::Dot => buffer.push('.'),
            Self::Pi => buffer.push_str(PI_TEXT),
            Self::Operator(op) => buffer.push(op.symbol()),
            Self::LParen => buffer.push('('),
            Self::RParen => buffer.push(')'),
        }
    }
}

/// Content of the engine buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Buffer {
    /// An expression being typed, possibly empty
    Expr(String),
    /// The sentinel left by a failed evaluation
    Error,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::Expr(String::new())
    }
}

impl Buffer {
    /// The text to display
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Expr(text) => text,
            Self::Error => ERROR_TEXT,
        }
    }
}

impl Display for Buffer {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

/// States of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing typed yet
    Empty,
    /// An expression is being typed
    InProgress,
    /// The last evaluation failed
    Error,
}

/// A calculator session
#[derive(Debug, Clone, Default)]
pub struct Engine {
    buffer: Buffer,
    config: Config,
}

impl Engine {
    /// Create an engine with an empty buffer and the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an empty buffer
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            buffer: Buffer::default(),
            config,
        }
    }

    /// The configuration of this engine
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current buffer
    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// The buffer text, `Error` for the sentinel
    #[must_use]
    pub fn display(&self) -> &str {
        self.buffer.as_str()
    }

    /// Get the state of the engine, derived from the buffer
    #[must_use]
    pub fn state(&self) -> State {
        match &self.buffer {
            Buffer::Error => State::Error,
            Buffer::Expr(text) if text.is_empty() => State::Empty,
            Buffer::Expr(_) => State::InProgress,
        }
    }

    /// Append `input` to the buffer.
    ///
    /// - in the Error state, digits, dots and π start a new buffer and
    ///   anything else is ignored;
    /// - an empty buffer only accepts `-` as operator;
    /// - an operator typed after another one replaces it.
    pub fn append(&mut self, input: Input) {
        let next = match &self.buffer {
            Buffer::Error if input.starts_number() => {
                let mut text = String::new();
                input.push_to(&mut text);
                if text.is_empty() {
                    return;
                }
                Buffer::Expr(text)
            }
            Buffer::Error => return,
            Buffer::Expr(text) => match append_to(text, input) {
                Some(text) => Buffer::Expr(text),
                None => return,
            },
        };
        self.replace("append", next);
    }

    /// Remove the last character, or leave the Error state.
    pub fn delete_last(&mut self) {
        let next = match &self.buffer {
            Buffer::Error => Buffer::default(),
            Buffer::Expr(text) => {
                let mut text = text.clone();
                text.pop();
                Buffer::Expr(text)
            }
        };
        self.replace("delete_last", next);
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.replace("clear", Buffer::default());
    }

    /// Evaluate the buffer and replace it with the rounded result, or with
    /// the Error sentinel. An empty buffer is left as is.
    pub fn evaluate(&mut self) {
        let next = match &self.buffer {
            Buffer::Expr(text) if text.is_empty() => return,
            Buffer::Expr(text) => self.result_of(text, None),
            Buffer::Error => Buffer::Error,
        };
        self.replace("evaluate", next);
    }

    /// Evaluate the buffer, apply `function` to the value and replace the
    /// buffer with the rounded result, or with the Error sentinel. An empty
    /// buffer is left as is.
    pub fn apply_unary(&mut self, function: Function) {
        let next = match &self.buffer {
            Buffer::Expr(text) if text.is_empty() => return,
            Buffer::Expr(text) => self.result_of(text, Some(function)),
            Buffer::Error => Buffer::Error,
        };
        self.replace("apply_unary", next);
    }

    fn result_of(&self, text: &str, function: Option<Function>) -> Buffer {
        match self.compute(text, function) {
            Ok(result) => Buffer::Expr(result),
            Err(err) => {
                tracing::debug!(buffer = text, error = %err, "evaluation failed");
                Buffer::Error
            }
        }
    }

    fn compute(&self, text: &str, function: Option<Function>) -> Result<String, Error> {
        let value = match function {
            Some(function) => function.apply(eval(text)?),
            None => {
                if has_division_by_zero(text) {
                    return Err(Error::invalid("division by zero"));
                }
                eval(text)?
            }
        };
        if !value.is_finite() {
            return Err(Error::invalid(format!("non-finite result {}", value)));
        }
        Ok(to_display(round_to_precision(
            value,
            self.config.precision(),
        )))
    }

    fn replace(&mut self, operation: &str, next: Buffer) {
        tracing::debug!(operation, from = %self.buffer, to = %next, "buffer updated");
        self.buffer = next;
    }
}

fn is_operator(c: char) -> bool {
    Operator::from_symbol(c).is_some()
}

/// New content of a non-sentinel buffer after typing `input`, or `None` when
/// the input is refused.
fn append_to(text: &str, input: Input) -> Option<String> {
    let mut next = text.to_string();
    if let Input::Operator(op) = input {
        if next.is_empty() && op != Operator::Minus {
            return None;
        }
        if next.ends_with(is_operator) {
            next.pop();
        }
    }
    input.push_to(&mut next);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Command;

    /// Dispatch every whitespace separated label of `keys` to `engine`
    fn press(engine: &mut Engine, keys: &str) {
        for key in keys.split_whitespace() {
            engine.dispatch(key.parse::<Command>().unwrap());
        }
    }

    fn run(keys: &str) -> String {
        let mut engine = Engine::new();
        press(&mut engine, keys);
        engine.display().to_string()
    }

    #[test]
    fn examples() {
        assert_eq!(run("2 + 3 ="), "5");
        assert_eq!(run("9 / 0 ="), "Error");
        assert_eq!(run("4 √"), "2");
    }

    #[test]
    fn digits_round_trip() {
        for digits in &["0", "7", "42", "1234567890", "3.25", "0.5", ".5", "100000"] {
            let mut engine = Engine::new();
            for c in digits.chars() {
                engine.dispatch(c.to_string().parse::<Command>().unwrap());
            }
            assert_eq!(engine.display(), *digits);
            engine.evaluate();
            let value: f64 = engine.display().parse().unwrap();
            assert_eq!(value, digits.parse::<f64>().unwrap(), "{}", digits);
        }
    }

    #[test]
    fn operator_replaces_operator() {
        assert_eq!(run("1 + *"), "1*");
        assert_eq!(run("1 * - / +"), "1+");
        assert_eq!(run("1 + ^"), "1^");
        assert_eq!(run("8 / 2 - ="), "Error");
        let mut engine = Engine::new();
        press(&mut engine, "5");
        engine.append(Input::Operator(Operator::Rem));
        engine.append(Input::Operator(Operator::Div));
        assert_eq!(engine.display(), "5/");
    }

    #[test]
    fn leading_operator() {
        assert_eq!(run("+"), "");
        assert_eq!(run("*"), "");
        assert_eq!(run("-"), "-");
        assert_eq!(run("- 5 * 2 ="), "-10");
        assert_eq!(run("- -"), "-");
        // the leading minus is an operator like any other
        assert_eq!(run("- *"), "*");
        assert_eq!(run("- +"), "+");
        assert_eq!(run("- * ="), "Error");
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(run("9 / 0 ="), "Error");
        assert_eq!(run("9 / 0 . ="), "Error");
        assert_eq!(run("9 / 0 . 5 ="), "Error");
        assert_eq!(run("1 / 0 + 1 ="), "Error");
        assert_eq!(run("1 / 1 0 ="), "0.1");
    }

    #[test]
    fn delete_last() {
        assert_eq!(run("1 2 + DEL"), "12");
        assert_eq!(run("DEL"), "");
        assert_eq!(run("9 / 0 = DEL"), "");
        assert_eq!(run("9 / 0 = Backspace"), "");
    }

    #[test]
    fn clear() {
        assert_eq!(run("1 2 + 3 C"), "");
        assert_eq!(run("9 / 0 = Escape"), "");
    }

    #[test]
    fn error_state() {
        let mut engine = Engine::new();
        press(&mut engine, "1 + =");
        assert_eq!(engine.state(), State::Error);
        assert_eq!(engine.display(), ERROR_TEXT);
        press(&mut engine, "+ ( ) =");
        assert_eq!(engine.state(), State::Error);
        engine.apply_unary(Function::Sin);
        assert_eq!(engine.state(), State::Error);
        press(&mut engine, "7");
        assert_eq!(engine.state(), State::InProgress);
        assert_eq!(engine.display(), "7");

        assert_eq!(run("1 + = ."), ".");
        assert_eq!(run("1 + = π"), "3.141592653589793");
    }

    #[test]
    fn states() {
        let mut engine = Engine::new();
        assert_eq!(engine.state(), State::Empty);
        engine.evaluate();
        engine.apply_unary(Function::Sqrt);
        assert_eq!(engine.state(), State::Empty);
        press(&mut engine, "3");
        assert_eq!(engine.state(), State::InProgress);
        engine.clear();
        assert_eq!(engine.state(), State::Empty);
    }

    #[test]
    fn evaluation() {
        assert_eq!(run("0 . 1 + 0 . 2 ="), "0.3");
        assert_eq!(run("2 ^ 1 0 ="), "1024");
        assert_eq!(run("( 1 + 2 ) * 3 ="), "9");
        assert_eq!(run("2 / 3 ="), "0.666666666667");
        assert_eq!(run("1 0 ^ 2 5 ="), "1e+25");
        assert_eq!(run("- 2 ^ 2 ="), "Error");
        assert_eq!(run("( - 2 ) ^ 2 ="), "4");
        assert_eq!(run("5 = ="), "5");
        assert_eq!(run("1 0 0 0 0 0 0 0 0 0 0 0 5 ="), "1000000000010");
        assert_eq!(run("- 1 0 0 0 0 0 0 0 0 0 0 0 5 ="), "-1000000000010");
        let mut engine = Engine::new();
        press(&mut engine, "7");
        engine.append(Input::Operator(Operator::Rem));
        press(&mut engine, "4 =");
        assert_eq!(engine.display(), "3");
    }

    #[test]
    fn unary() {
        assert_eq!(run("5 0 %"), "0.5");
        assert_eq!(run("1 0 0 0 log"), "3");
        assert_eq!(run("0 cos"), "1");
        assert_eq!(run("π sin"), "1.22464679915e-16");
        assert_eq!(run("π / 4 tan"), "1");
        assert_eq!(run("2 sqrt"), "1.41421356237");
        assert_eq!(run("1 + 3 √"), "2");
        assert_eq!(run("- 1 √"), "Error");
        assert_eq!(run("0 log"), "Error");
        assert_eq!(run("1 + √"), "Error");
    }

    #[test]
    fn precision() {
        let mut engine = Engine::with_config(Config::with_precision(3));
        press(&mut engine, "2 / 3 =");
        assert_eq!(engine.display(), "0.667");
        assert_eq!(engine.config().precision(), 3);
    }

    #[test]
    fn out_of_range_digit() {
        let mut engine = Engine::new();
        engine.append(Input::Digit(12));
        assert_eq!(engine.display(), "");

        press(&mut engine, "1 + =");
        engine.append(Input::Digit(12));
        assert_eq!(engine.state(), State::Error);
        assert_eq!(engine.display(), ERROR_TEXT);
    }
}
