use thiserror::Error;

/// Error type for the keypad crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The buffer could not be evaluated: forbidden characters, a parse
    /// failure, a division by zero or a non-finite result.
    #[error("InvalidExpression: {0}")]
    InvalidExpression(String),
    /// A button label or key name with no command bound to it
    #[error("UnknownKey: {0}")]
    UnknownKey(String),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidExpression(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        assert_eq!(
            Error::invalid("division by zero").to_string(),
            "InvalidExpression: division by zero"
        );
        assert_eq!(
            Error::UnknownKey("F13".into()).to_string(),
            "UnknownKey: F13"
        );
    }
}
