//! Tokenizer and recursive-descent parser for the closed arithmetic
//! grammar. Operates on already-substituted text, so the only legal
//! characters are digits, `. + - * / ( )` and whitespace.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FormulaError {
    #[error("unexpected character '{0}' in formula")]
    UnexpectedChar(char),
    #[error("malformed number literal: {0}")]
    BadNumber(String),
    #[error("unexpected end of formula")]
    UnexpectedEnd,
    #[error("unexpected token at position {0}")]
    UnexpectedToken(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

pub(super) fn parse_and_eval(text: &str) -> Result<f64, FormulaError> {
    let tokens = tokenize(text)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;
    if parser.pos != parser.tokens.len() {
        return Err(FormulaError::UnexpectedToken(parser.pos));
    }
    Ok(value)
}

fn tokenize(text: &str) -> Result<Vec<Token>, FormulaError> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '0'..='9' | '.' => {
                let mut number = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        number.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = number
                    .parse::<f64>()
                    .map_err(|_| FormulaError::BadNumber(number.clone()))?;
                tokens.push(Token::Number(value));
            }
            other => return Err(FormulaError::UnexpectedChar(other)),
        }
    }
    Ok(tokens)
}

/// Recursive descent over `expr := term (('+'|'-') term)*`,
/// `term := factor (('*'|'/') factor)*`,
/// `factor := number | '(' expr ')' | '-' factor`.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Result<Token, FormulaError> {
        let token = self.peek().ok_or(FormulaError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn expr(&mut self) -> Result<f64, FormulaError> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Token::Minus => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, FormulaError> {
        let mut value = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.pos += 1;
                    // Division by zero yields a non-finite value collapsed
                    // to 0 at the public boundary.
                    value /= self.factor()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, FormulaError> {
        match self.advance()? {
            Token::Number(value) => Ok(value),
            Token::Minus => Ok(-self.factor()?),
            Token::LParen => {
                let value = self.expr()?;
                match self.advance()? {
                    Token::RParen => Ok(value),
                    _ => Err(FormulaError::UnexpectedToken(self.pos - 1)),
                }
            }
            _ => Err(FormulaError::UnexpectedToken(self.pos - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_binds_multiplication_tighter() {
        assert_eq!(parse_and_eval("2 + 3 * 4").expect("parse"), 14.0);
        assert_eq!(parse_and_eval("(2 + 3) * 4").expect("parse"), 20.0);
    }

    #[test]
    fn unary_minus_nests() {
        assert_eq!(parse_and_eval("-3 + 5").expect("parse"), 2.0);
        assert_eq!(parse_and_eval("4 - -2").expect("parse"), 6.0);
        assert_eq!(parse_and_eval("--2").expect("parse"), 2.0);
    }

    #[test]
    fn rejects_foreign_characters() {
        assert_eq!(parse_and_eval("2 + x"), Err(FormulaError::UnexpectedChar('x')));
        assert_eq!(parse_and_eval("exec(1)"), Err(FormulaError::UnexpectedChar('e')));
    }

    #[test]
    fn rejects_dangling_operators_and_parens() {
        assert!(parse_and_eval("2 +").is_err());
        assert!(parse_and_eval("(1 + 2").is_err());
        assert!(parse_and_eval("1 2").is_err());
    }

    #[test]
    fn rejects_malformed_number() {
        assert_eq!(
            parse_and_eval("1.2.3 + 1"),
            Err(FormulaError::BadNumber("1.2.3".to_owned()))
        );
    }
}
