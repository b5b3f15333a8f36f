use crate::ast::Ast;
use crate::error::Error;
use crate::lexer::Lexer;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// Anything outside of the arithmetic alphabet, once `π` and `^` are
    /// substituted.
    static ref FORBIDDEN: Regex = Regex::new(r"[^0-9+\-*/().%* \t\n\r]").unwrap();
    /// `/0` followed by a dot or the end of the buffer.
    static ref DIVISION_BY_ZERO: Regex = Regex::new(r"/\s*0(?:\.|$)").unwrap();
}

/// Decimal text substituted for `π` in buffers.
pub const PI_TEXT: &str = "3.141592653589793";

/// Evaluate the text of a calculator buffer.
///
/// `π` stands for its decimal value and `^` for `**`. Any character other
/// than digits, `.`, `+ - * / %`, parentheses and whitespace is rejected.
///
/// The returned value is not rounded, and can be infinite or `NaN`.
///
/// # Example
///
/// ```
/// # use keypad::eval;
/// assert_eq!(eval("45 - 2^3"), Ok(37.0));
/// assert_eq!(eval("7 % 4 * 2"), Ok(6.0));
/// assert!(eval("2 + x").is_err());
/// ```
pub fn eval(buffer: &str) -> Result<f64, Error> {
    let normalized = normalize(buffer);
    if let Some(found) = FORBIDDEN.find(&normalized) {
        return Err(Error::invalid(format!(
            "invalid character '{}'",
            found.as_str()
        )));
    }
    Expr::parse(&normalized).map(|expr| expr.value())
}

/// Replace `π` by its decimal text and `^` by `**`.
///
/// ```
/// # use keypad::normalize;
/// assert_eq!(normalize("2^π"), "2**3.141592653589793");
/// ```
#[must_use]
pub fn normalize(buffer: &str) -> Cow<str> {
    if !buffer.contains(|c: char| c == 'π' || c == '^') {
        return Cow::Borrowed(buffer);
    }
    Cow::Owned(buffer.replace('π', PI_TEXT).replace('^', "**"))
}

/// Check for a literal division by zero in `buffer`.
///
/// Only `/0` at the end of the buffer or `/0.` are recognised, possibly with
/// whitespace after the slash.
///
/// ```
/// # use keypad::has_division_by_zero;
/// assert!(has_division_by_zero("9/0"));
/// assert!(has_division_by_zero("9/ 0.0"));
/// assert!(!has_division_by_zero("9/05"));
/// ```
#[must_use]
pub fn has_division_by_zero(buffer: &str) -> bool {
    DIVISION_BY_ZERO.is_match(buffer)
}

/// A parsed arithmetic expression.
///
/// # Examples
/// ```
/// # use keypad::Expr;
/// let expr = Expr::parse("3 + 5 * 2").unwrap();
/// assert_eq!(expr.value(), 13.0);
///
/// let expr = Expr::parse("(1 + 1) ** 10").unwrap();
/// assert_eq!(expr.value(), 1024.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    ast: Ast,
}

impl Expr {
    /// Parse the given arithmetic `expression` into an `Expr`. Only `**` is
    /// understood as exponentiation here, see [`normalize`].
    ///
    /// # Examples
    /// ```
    /// # use keypad::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // invalid expressions
    /// assert!(Expr::parse("3 + ").is_err());
    /// assert!(Expr::parse("-2 ** 2").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let mut lexer = Lexer::new(expression);
        let result = lexer
            .parse()
            .and_then(|mut tokens| Ast::from_tokens(&mut tokens));
        match result {
            Ok(ast) => Ok(Self { ast }),
            Err(err) => {
                tracing::debug!(expression, error = %err, "parse failed");
                Err(err)
            }
        }
    }

    /// Compute the value of the expression.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.ast.value()
    }

    /// Get the tree of this expression
    #[must_use]
    pub fn ast(&self) -> &Ast {
        &self.ast
    }
}
