use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenType {
    Identifier,
    LeftParen,
    RightParen,
    Tensor,
    Plus,
    With,
    Lolli,
    Bang,
    One,
    Top,
    Zero,
    Bot,
}

impl TokenType {
    /// How the token is described in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenType::Identifier => "identifier",
            TokenType::LeftParen => "'('",
            TokenType::RightParen => "')'",
            TokenType::Tensor => "'⊗'",
            TokenType::Plus => "'⊕'",
            TokenType::With => "'&'",
            TokenType::Lolli => "'⊸'",
            TokenType::Bang => "'!'",
            TokenType::One => "'1'",
            TokenType::Top => "'⊤'",
            TokenType::Zero => "'0'",
            TokenType::Bot => "'⊥'",
        }
    }
}

// The ASCII word aliases for connectives and units.
// A word only counts as a keyword when it is the whole identifier run,
// so "plus" is a keyword but "plusses" is an atom.
fn keyword(word: &str) -> Option<TokenType> {
    match word {
        "tensor" | "times" => Some(TokenType::Tensor),
        "plus" => Some(TokenType::Plus),
        "with" => Some(TokenType::With),
        "lolli" => Some(TokenType::Lolli),
        "bang" => Some(TokenType::Bang),
        "1" | "one" => Some(TokenType::One),
        "top" => Some(TokenType::Top),
        "0" | "zero" => Some(TokenType::Zero),
        "bot" => Some(TokenType::Bot),
        _ => None,
    }
}

pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether a word can name a hypothesis.
/// It has to lex as a single identifier, so connective words like "with" are out.
pub fn is_name(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_identifier_char) && keyword(word).is_none()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub token_type: TokenType,

    /// The source text of the token.
    pub text: String,

    /// Zero-based character offset into the input.
    pub column: usize,
}

/// A failure to parse formula text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub message: String,

    /// Zero-based character offset where the problem was found.
    pub column: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, column: usize) -> ParseError {
        ParseError {
            message: message.into(),
            column,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at column {}", self.message, self.column + 1)
    }
}

/// Produces tokens on demand, so that a caller can stop partway through the input
/// and hand the remainder to someone else.
pub struct TokenIter<'a> {
    input: &'a str,

    // Byte offset of the next unread character.
    position: usize,
}

impl<'a> TokenIter<'a> {
    pub fn new(input: &'a str) -> TokenIter<'a> {
        TokenIter { input, position: 0 }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.position..];
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();
    }

    fn column_of(&self, byte_offset: usize) -> usize {
        self.input[..byte_offset].chars().count()
    }

    /// The column of the next token, or of the end of input.
    pub fn column(&mut self) -> usize {
        self.skip_whitespace();
        self.column_of(self.position)
    }

    /// Everything that has not been consumed yet, without leading whitespace.
    pub fn remaining(&mut self) -> &'a str {
        self.skip_whitespace();
        &self.input[self.position..]
    }

    pub fn at_end(&mut self) -> bool {
        self.remaining().is_empty()
    }

    /// Reads the next token without consuming it.
    /// Returns None at the end of input.
    pub fn peek(&mut self) -> Result<Option<Token>, ParseError> {
        let saved = self.position;
        let token = self.next_token();
        self.position = saved;
        token
    }

    /// Consumes the next token.
    /// Returns None at the end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        self.skip_whitespace();
        let start = self.position;
        let column = self.column_of(start);
        let rest = &self.input[start..];
        let mut chars = rest.chars();
        let Some(c) = chars.next() else {
            return Ok(None);
        };

        let token_type = match c {
            '(' => TokenType::LeftParen,
            ')' => TokenType::RightParen,
            '⊗' | '*' => TokenType::Tensor,
            '⊕' | '+' => TokenType::Plus,
            '&' => TokenType::With,
            '⊸' => TokenType::Lolli,
            '!' => TokenType::Bang,
            '⊤' => TokenType::Top,
            '⊥' => TokenType::Bot,
            '-' => {
                if chars.next() != Some('>') {
                    return Err(ParseError::new("expected '>' after '-'", column + 1));
                }
                self.position += 2;
                return Ok(Some(Token {
                    token_type: TokenType::Lolli,
                    text: "->".to_string(),
                    column,
                }));
            }
            c if is_identifier_char(c) => {
                let len = rest
                    .char_indices()
                    .find(|(_, c)| !is_identifier_char(*c))
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len());
                let word = &rest[..len];
                self.position += len;
                return Ok(Some(Token {
                    token_type: keyword(word).unwrap_or(TokenType::Identifier),
                    text: word.to_string(),
                    column,
                }));
            }
            c => {
                return Err(ParseError::new(
                    format!("unexpected character '{}'", c),
                    column,
                ))
            }
        };
        self.position += c.len_utf8();
        Ok(Some(Token {
            token_type,
            text: c.to_string(),
            column,
        }))
    }
}
