/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, kept as written
    Value(String),
    /// A binary operator
    Op(Op),
    /// A prefix `+` or `-`
    Unary(UnaryOp),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

/// Allowed binary operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Plus,
    Minus,
    Mul,
    Div,
    Rem,
    Exp,
}

/// Prefix operators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

/// Precedence of the prefix operators: above `*` and `/`, below `**`.
pub const UNARY_PRECEDENCE: u8 = 3;

impl Op {
    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div | Self::Rem => 2,
            Self::Exp => 4,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div | Self::Rem => true,
            Self::Exp => false,
        }
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }
}

#[cfg(test)]
mod tests {
    use super::{Op, UNARY_PRECEDENCE};

    #[test]
    fn precedence() {
        assert!(Op::Plus.precedence() < Op::Mul.precedence());
        assert_eq!(Op::Rem.precedence(), Op::Div.precedence());
        assert!(Op::Mul.precedence() < UNARY_PRECEDENCE);
        assert!(UNARY_PRECEDENCE < Op::Exp.precedence());
    }

    #[test]
    fn associativity() {
        assert!(Op::Exp.is_right_associative());
        assert!(Op::Minus.is_left_associative());
        assert!(Op::Rem.is_left_associative());
    }
}
