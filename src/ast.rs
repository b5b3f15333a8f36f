use crate::error::Error;
use crate::token::{Op, Token, UnaryOp};

/// Ast nodes for the expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// A constant value
    Value(f64),
    /// -<arg>
    Neg(Box<Ast>),
    /// <left> + <right>
    Add(Box<Ast>, Box<Ast>),
    /// <left> - <right>
    Sub(Box<Ast>, Box<Ast>),
    /// <left> * <right>
    Mul(Box<Ast>, Box<Ast>),
    /// <left> / <right>
    Div(Box<Ast>, Box<Ast>),
    /// <left> % <right>
    Rem(Box<Ast>, Box<Ast>),
    /// <left> ** <right>
    Exp(Box<Ast>, Box<Ast>),
}

impl Ast {
    /// Construct the AST for a vector of tokens in reverse polish notation.
    /// This function eats the tokens as it uses them, and fails if some are
    /// left over.
    pub fn from_tokens(tokens: &mut Vec<Token>) -> Result<Self, Error> {
        let ast = Self::from_tokens_internal(tokens, "")?;
        if tokens.is_empty() {
            Ok(ast)
        } else {
            Err(Error::invalid("trailing tokens in expression"))
        }
    }

    fn from_tokens_internal(tokens: &mut Vec<Token>, context: &str) -> Result<Self, Error> {
        match tokens.pop() {
            Some(Token::Value(value)) => value
                .parse()
                .map(Self::Value)
                .map_err(|_| Error::invalid(format!("invalid value {}", value))),
            Some(Token::Unary(op)) => {
                let arg = Self::from_tokens_internal(tokens, " after unary operator")?;
                match op {
                    UnaryOp::Plus => Ok(arg),
                    UnaryOp::Minus => Ok(Self::Neg(Box::new(arg))),
                }
            }
            Some(Token::Op(op)) => {
                let right = Box::new(Self::from_tokens_internal(tokens, " after operator")?);
                let left = Box::new(Self::from_tokens_internal(tokens, " before operator")?);
                Ok(match op {
                    Op::Plus => Self::Add(left, right),
                    Op::Minus => Self::Sub(left, right),
                    Op::Mul => Self::Mul(left, right),
                    Op::Div => Self::Div(left, right),
                    Op::Rem => Self::Rem(left, right),
                    Op::Exp => Self::Exp(left, right),
                })
            }
            Some(other) => Err(Error::invalid(format!(
                "unexpected {:?} token after shunting yard",
                other
            ))),
            None => Err(Error::invalid(format!("empty expression{}", context))),
        }
    }

    /// Compute the value of this tree.
    pub fn value(&self) -> f64 {
        match self {
            Self::Value(value) => *value,
            Self::Neg(arg) => -arg.value(),
            Self::Add(left, right) => left.value() + right.value(),
            Self::Sub(left, right) => left.value() - right.value(),
            Self::Mul(left, right) => left.value() * right.value(),
            Self::Div(left, right) => left.value() / right.value(),
            Self::Rem(left, right) => libm::fmod(left.value(), right.value()),
            Self::Exp(left, right) => libm::pow(left.value(), right.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ast;
    use crate::lexer::Lexer;

    fn ast(input: &str) -> Ast {
        Ast::from_tokens(&mut Lexer::new(input).parse().unwrap()).unwrap()
    }

    #[test]
    fn structure() {
        assert_eq!(
            ast("-1+2"),
            Ast::Add(
                Box::new(Ast::Neg(Box::new(Ast::Value(1.0)))),
                Box::new(Ast::Value(2.0))
            )
        );
        assert_eq!(ast("+4"), Ast::Value(4.0));
        assert_eq!(ast("((4))"), Ast::Value(4.0));
    }

    #[test]
    fn value() {
        assert_eq!(ast("3 + 5").value(), 8.0);
        assert_eq!(ast("(3 + 5**2)*45").value(), 1260.0);
        assert_eq!(ast("2**3**2").value(), 512.0);
        assert_eq!(ast("-7%3").value(), -1.0);
        assert_eq!(ast("7.5%2").value(), 1.5);
        assert_eq!(ast("(-2)**2").value(), 4.0);
        assert_eq!(ast("10/4").value(), 2.5);
        assert!(ast("1/0").value().is_infinite());
    }

    #[test]
    fn leftover_tokens() {
        let mut tokens = Lexer::new("1").parse().unwrap();
        tokens.insert(0, crate::token::Token::Value("2".into()));
        assert!(Ast::from_tokens(&mut tokens).is_err());
    }
}
