//! Keypad labels and key names, and the engine commands they stand for.

use crate::engine::{Engine, Input, Operator};
use crate::error::Error;
use crate::function::Function;
use std::str::FromStr;

/// An engine operation bound to a button or a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// [`Engine::append`]
    Append(Input),
    /// [`Engine::evaluate`]
    Evaluate,
    /// [`Engine::delete_last`]
    DeleteLast,
    /// [`Engine::clear`]
    Clear,
    /// [`Engine::apply_unary`]
    Unary(Function),
}

impl FromStr for Command {
    type Err = Error;

    /// Parse a button label (`7`, `DEL`, `√`, ...) or a key name (`Enter`,
    /// `Backspace`, `Escape`).
    ///
    /// `%` is the percent shortcut; the remainder operator has no key.
    ///
    /// ```
    /// # use keypad::{Command, Function, Input, Operator};
    /// assert_eq!("7".parse::<Command>(), Ok(Command::Append(Input::Digit(7))));
    /// assert_eq!("^".parse::<Command>(), Ok(Command::Append(Input::Operator(Operator::Exp))));
    /// assert_eq!("%".parse::<Command>(), Ok(Command::Unary(Function::Percent)));
    /// assert_eq!("Enter".parse::<Command>(), Ok(Command::Evaluate));
    /// assert!("F13".parse::<Command>().is_err());
    /// ```
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let command = match label {
            "=" | "Enter" => Self::Evaluate,
            "DEL" | "Backspace" => Self::DeleteLast,
            "C" | "Escape" => Self::Clear,
            "." => Self::Append(Input::Dot),
            "π" | "pi" => Self::Append(Input::Pi),
            "(" => Self::Append(Input::LParen),
            ")" => Self::Append(Input::RParen),
            _ => {
                if let Ok(function) = label.parse::<Function>() {
                    return Ok(Self::Unary(function));
                }
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => {
                        Self::Append(Input::Digit(c as u8 - b'0'))
                    }
                    (Some(c), None) => match Operator::from_symbol(c) {
                        Some(op) => Self::Append(Input::Operator(op)),
                        None => return Err(Error::UnknownKey(label.to_string())),
                    },
                    _ => return Err(Error::UnknownKey(label.to_string())),
                }
            }
        };
        Ok(command)
    }
}

impl Engine {
    /// Run `command` on this engine
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Append(input) => self.append(input),
            Command::Evaluate => self.evaluate(),
            Command::DeleteLast => self.delete_last(),
            Command::Clear => self.clear(),
            Command::Unary(function) => self.apply_unary(function),
        }
    }
}
