#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal,
    clippy::must_use_candidate
)]

//! Keypad, the expression engine behind a pocket calculator.
//!
//! An [`Engine`](struct.Engine.html) holds the text typed so far, and turns
//! button presses into edits of that text. The easiest way to drive it is
//! with keypad labels:
//!
//! ```
//! use keypad::{Command, Engine};
//!
//! let mut engine = Engine::new();
//! for key in "1 2 * 3 =".split_whitespace() {
//!     engine.dispatch(key.parse::<Command>().unwrap());
//! }
//! assert_eq!(engine.display(), "36");
//! ```
//!
//! Failed evaluations leave the `Error` sentinel in the buffer, which the
//! next digit replaces:
//!
//! ```
//! use keypad::{Engine, Input, Operator, State};
//!
//! let mut engine = Engine::new();
//! engine.append(Input::Digit(9));
//! engine.append(Input::Operator(Operator::Div));
//! engine.append(Input::Digit(0));
//! engine.evaluate();
//! assert_eq!(engine.display(), "Error");
//! assert_eq!(engine.state(), State::Error);
//!
//! engine.append(Input::Digit(4));
//! assert_eq!(engine.display(), "4");
//! ```
//!
//! The evaluator is also usable on its own with [`eval`](fn.eval.html):
//!
//! ```
//! assert_eq!(keypad::eval("3 + 5 * 2"), Ok(13.0));
//! ```
//!
//! # Language definition
//!
//! Buffers can contain the following elements:
//!
//! - decimal literals: `12`, `0.5`, `.5`, `5.`;
//! - left and right parenthesis;
//! - binary operators: `+`, `-`, `*`, `/`, `%` for the floating point
//!   remainder, and `^` or `**` for exponentiation;
//! - prefix `+` and `-`;
//! - `π`, standing for `3.141592653589793`.
//!
//! Any other symbol is forbidden in the input. Exponentiation is right
//! associative and binds tighter than the prefix operators, but a prefix
//! operator cannot be applied directly to its base: `-2^2` is an error,
//! `(-2)^2` and `-(2^2)` are not.
//!
//! Results are rounded to 12 significant digits (see
//! [`Config`](struct.Config.html)) and written in the shortest form that
//! reads back to the same number.
//!
//! # Technical details
//!
//! The evaluator uses a simple Shuntting-Yard algorithm to build an AST from
//! the buffer, and interprets it with `f64` arithmetic.

#[macro_use]
extern crate lazy_static;

mod ast;
mod config;
mod engine;
mod error;
mod expr;
mod format;
mod function;
mod keys;
mod lexer;
mod token;

pub use ast::Ast;
pub use config::Config;
pub use engine::{Buffer, Engine, Input, Operator, State, ERROR_TEXT};
pub use error::Error;
pub use expr::{eval, has_division_by_zero, normalize, Expr, PI_TEXT};
pub use format::{round_to_precision, to_display, DEFAULT_PRECISION, MAX_PRECISION};
pub use function::{Function, FUNCTIONS};
pub use keys::Command;
