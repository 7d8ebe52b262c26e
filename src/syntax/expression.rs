// Recursive descent parsing for formulas.
//
// From loosest to tightest binding:
//   lolli   := with (⊸ lolli)?            right associative
//   with    := plus (& plus)*
//   plus    := tensor (⊕ tensor)*
//   tensor  := unary (⊗ unary)*
//   unary   := ! unary | primary
//   primary := ( lolli ) | 1 | ⊤ | 0 | ⊥ | ident ⊥?

use crate::formula::Formula;
use crate::syntax::token::{ParseError, Token, TokenIter, TokenType};

struct Parser<'a> {
    tokens: TokenIter<'a>,
}

impl<'a> Parser<'a> {
    // Consumes the next token if it has the given type.
    fn accept(&mut self, token_type: TokenType) -> Result<Option<Token>, ParseError> {
        match self.tokens.peek()? {
            Some(token) if token.token_type == token_type => self.tokens.next_token(),
            _ => Ok(None),
        }
    }

    fn expect(&mut self, token_type: TokenType) -> Result<Token, ParseError> {
        let column = self.tokens.column();
        match self.accept(token_type)? {
            Some(token) => Ok(token),
            None => Err(ParseError::new(
                format!("expected {}", token_type.describe()),
                column,
            )),
        }
    }

    fn lolli(&mut self) -> Result<Formula, ParseError> {
        let left = self.with()?;
        if self.accept(TokenType::Lolli)?.is_some() {
            let right = self.lolli()?;
            return Ok(Formula::lolli(left, right));
        }
        Ok(left)
    }

    fn with(&mut self) -> Result<Formula, ParseError> {
        let mut answer = self.plus()?;
        while self.accept(TokenType::With)?.is_some() {
            let right = self.plus()?;
            answer = Formula::with(answer, right);
        }
        Ok(answer)
    }

    fn plus(&mut self) -> Result<Formula, ParseError> {
        let mut answer = self.tensor()?;
        while self.accept(TokenType::Plus)?.is_some() {
            let right = self.tensor()?;
            answer = Formula::plus(answer, right);
        }
        Ok(answer)
    }

    fn tensor(&mut self) -> Result<Formula, ParseError> {
        let mut answer = self.unary()?;
        while self.accept(TokenType::Tensor)?.is_some() {
            let right = self.unary()?;
            answer = Formula::tensor(answer, right);
        }
        Ok(answer)
    }

    fn unary(&mut self) -> Result<Formula, ParseError> {
        if self.accept(TokenType::Bang)?.is_some() {
            return Ok(Formula::bang(self.unary()?));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Formula, ParseError> {
        let column = self.tokens.column();
        let Some(token) = self.tokens.next_token()? else {
            return Err(ParseError::new("expected a formula", column));
        };
        match token.token_type {
            TokenType::LeftParen => {
                let inner = self.lolli()?;
                self.expect(TokenType::RightParen)?;
                Ok(inner)
            }
            TokenType::One => Ok(Formula::One),
            TokenType::Top => Ok(Formula::Top),
            TokenType::Zero => Ok(Formula::Zero),
            TokenType::Bot => Ok(Formula::Bot),
            TokenType::Identifier => {
                let negated = self.accept(TokenType::Bot)?.is_some();
                Ok(Formula::Atom {
                    name: token.text,
                    negated,
                })
            }
            _ => Err(ParseError::new(
                format!("expected a formula but found '{}'", token.text),
                token.column,
            )),
        }
    }
}

/// Parses the whole input as a single formula.
pub fn parse_formula(text: &str) -> Result<Formula, ParseError> {
    let mut parser = Parser {
        tokens: TokenIter::new(text),
    };
    let formula = parser.lolli()?;
    if !parser.tokens.at_end() {
        let column = parser.tokens.column();
        return Err(ParseError::new(
            format!("unexpected trailing input '{}'", parser.tokens.remaining()),
            column,
        ));
    }
    Ok(formula)
}

/// Parses the longest formula at the start of the input, and returns the unparsed remainder.
///
/// This works because the grammar never accepts two operands in a row without a connective
/// between them. After a complete formula, a following identifier can only start something else,
/// so stopping there is the only way to succeed.
/// A remainder that begins with a connective keyword, like "with", will be read as part of the
/// formula rather than left over. Hypothesis names are never connective keywords, so a list of
/// names after the formula is always left over intact.
pub fn parse_formula_prefix(text: &str) -> Result<(Formula, &str), ParseError> {
    let mut parser = Parser {
        tokens: TokenIter::new(text),
    };
    let formula = parser.lolli()?;
    Ok((formula, parser.tokens.remaining()))
}
