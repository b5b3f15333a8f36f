use crate::error::Error;
use crate::token::{Op, Token, UnaryOp, UNARY_PRECEDENCE};
use std::iter::Peekable;
use std::str::Chars;

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    /// True when the next token has to start an operand: at the start, after
    /// an operator and after `(`.
    expect_operand: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &str) -> Lexer {
        Lexer {
            input: string.chars().peekable(),
            expect_operand: true,
        }
    }

    /// Tokenize the input and reorder it in reverse polish notation.
    pub fn parse(&mut self) -> Result<Vec<Token>, Error> {
        let mut output = Vec::new();
        let mut operators: Vec<Token> = Vec::new();

        'tokens: while let Some(token) = self.next_token()? {
            match token {
                Token::Value(_) => {
                    if !self.expect_operand {
                        return Err(Error::invalid("missing operator between operands"));
                    }
                    output.push(token);
                    self.expect_operand = false;
                }
                Token::Unary(_) => operators.push(token),
                Token::Op(o1) => {
                    if self.expect_operand {
                        return Err(Error::invalid("operator without left operand"));
                    }
                    if o1 == Op::Exp {
                        if let Some(Token::Unary(_)) = operators.last() {
                            return Err(Error::invalid(
                                "unary operator used immediately before exponentiation",
                            ));
                        }
                    }
                    'operators: while let Some(top) = operators.last() {
                        let p2 = match *top {
                            Token::Op(o2) => o2.precedence(),
                            Token::Unary(_) => UNARY_PRECEDENCE,
                            _ => break 'operators,
                        };
                        let pop_me = o1.is_left_associative() && o1.precedence() <= p2;
                        let pop_me = pop_me || o1.is_right_associative() && o1.precedence() < p2;
                        if !pop_me {
                            break 'operators;
                        }
                        if let Some(top) = operators.pop() {
                            output.push(top);
                        }
                    }
                    operators.push(token);
                    self.expect_operand = true;
                }
                Token::LParen => {
                    if !self.expect_operand {
                        return Err(Error::invalid("missing operator before parenthesis"));
                    }
                    operators.push(token);
                }
                Token::RParen => {
                    if self.expect_operand {
                        return Err(Error::invalid("missing operand before closing parenthesis"));
                    }
                    while let Some(token) = operators.pop() {
                        match token {
                            Token::LParen => continue 'tokens,
                            other => output.push(other),
                        }
                    }
                    return Err(Error::invalid("mismatched parenthesis"));
                }
            }
        }

        if self.expect_operand {
            return Err(Error::invalid("unexpected end of expression"));
        }
        while let Some(token) = operators.pop() {
            match token {
                Token::LParen => return Err(Error::invalid("mismatched parenthesis")),
                other => output.push(other),
            }
        }
        tracing::trace!(tokens = ?output, "reverse polish notation");
        Ok(output)
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while let Some(&c) = self.input.peek() {
            if !is_whitespace(c) {
                break;
            }
            self.input.next();
        }

        let c = match self.input.next() {
            Some(c) => c,
            None => return Ok(None),
        };
        let token = match c {
            c if is_value_start(c) => Token::Value(self.number(c)?),
            '+' | '-' => {
                if self.input.peek() == Some(&c) {
                    return Err(Error::invalid(format!("unexpected '{}{}'", c, c)));
                }
                match (c, self.expect_operand) {
                    ('+', true) => Token::Unary(UnaryOp::Plus),
                    ('-', true) => Token::Unary(UnaryOp::Minus),
                    ('+', false) => Token::Op(Op::Plus),
                    _ => Token::Op(Op::Minus),
                }
            }
            '*' => {
                if self.input.peek() == Some(&'*') {
                    self.input.next();
                    Token::Op(Op::Exp)
                } else {
                    Token::Op(Op::Mul)
                }
            }
            '/' => Token::Op(Op::Div),
            '%' => Token::Op(Op::Rem),
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(Error::invalid(format!(
                    "unexpected character in input: {}",
                    other
                )));
            }
        };
        Ok(Some(token))
    }

    /// Read a decimal literal: digits with at most one `.`, which may be
    /// leading or trailing but not alone.
    fn number(&mut self, first: char) -> Result<String, Error> {
        let mut literal = String::new();
        literal.push(first);
        let mut seen_dot = first == '.';
        while let Some(&c) = self.input.peek() {
            if c.is_ascii_digit() {
                literal.push(c);
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                literal.push(c);
            } else {
                break;
            }
            self.input.next();
        }
        if literal == "." {
            return Err(Error::invalid("invalid number '.'"));
        }
        Ok(literal)
    }
}

/// Check if `c` can appear at the first character of a value
fn is_value_start(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
