use std::fmt;

use crate::engine::tactics::TacticKind;
use crate::formula::Formula;
use crate::syntax::expression::parse_formula;
use crate::syntax::token::{is_identifier_char, is_name, ParseError};

/// Lines starting with this are ignored.
pub const COMMENT_PREFIX: &str = "//";

/// One meaningful line of a proof script.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Statement {
    /// Starts a new theorem block, like:
    ///   theorem swap:
    /// The name is optional.
    Theorem { name: Option<String> },

    /// Ends the current theorem block.
    End,

    /// Declares a hypothesis, like:
    ///   hyp h : A ⊗ B
    Hypothesis { name: String, formula: Formula },

    /// Declares a goal to prove, like:
    ///   goal B ⊗ A
    Goal { formula: Formula },

    /// Applies a tactic to the current goal. This is either written explicitly:
    ///   tactic destruct h
    /// or with just the tactic name:
    ///   destruct h
    /// The arguments are kept as raw text, since some tactics contain formulas.
    Tactic { name: String, args: String },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StatementError {
    /// A formula on the line didn't parse.
    Parse(ParseError),

    /// The line starts with a keyword but the rest of it is malformed.
    Malformed(String),

    /// A theorem line with a name we can't use.
    /// The line still starts a new theorem block, which carries the error.
    BadTheoremName(String),

    /// We can't tell what the line is supposed to be.
    Unrecognized(String),
}

impl From<ParseError> for StatementError {
    fn from(error: ParseError) -> Self {
        StatementError::Parse(error)
    }
}

impl fmt::Display for StatementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatementError::Parse(e) => write!(f, "parse error: {}", e),
            StatementError::Malformed(message) => write!(f, "{}", message),
            StatementError::BadTheoremName(name) => write!(f, "bad theorem name '{}'", name),
            StatementError::Unrecognized(line) => write!(f, "unrecognized line '{}'", line),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_identifier_char)
}

// Splits off the first whitespace-separated word.
fn split_first_word(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(i) => (&line[..i], line[i..].trim_start()),
        None => (line, ""),
    }
}

fn parse_theorem(rest: &str) -> Result<Statement, StatementError> {
    let name = rest.trim_end_matches(':').trim_end();
    if name.is_empty() {
        return Ok(Statement::Theorem { name: None });
    }
    if !is_identifier(name) {
        return Err(StatementError::BadTheoremName(name.to_string()));
    }
    Ok(Statement::Theorem {
        name: Some(name.to_string()),
    })
}

fn parse_hypothesis(rest: &str) -> Result<Statement, StatementError> {
    let Some((name, formula_text)) = rest.split_once(':') else {
        return Err(StatementError::Malformed(
            "expected 'hyp <name> : <formula>'".to_string(),
        ));
    };
    let name = name.trim();
    if !is_name(name) {
        return Err(StatementError::Malformed(format!(
            "bad hypothesis name '{}'",
            name
        )));
    }
    let formula = parse_formula(formula_text)?;
    Ok(Statement::Hypothesis {
        name: name.to_string(),
        formula,
    })
}

impl Statement {
    /// Parses a single line of a script.
    /// Returns None for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Statement>, StatementError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return Ok(None);
        }

        let (keyword, rest) = split_first_word(line);
        let statement = match keyword.to_lowercase().as_str() {
            "theorem" => parse_theorem(rest)?,
            "end" if rest.is_empty() => Statement::End,
            "hyp" => parse_hypothesis(rest)?,
            "goal" => Statement::Goal {
                formula: parse_formula(rest)?,
            },
            "tactic" => {
                let (name, args) = split_first_word(rest);
                if name.is_empty() {
                    return Err(StatementError::Malformed(
                        "expected a tactic name after 'tactic'".to_string(),
                    ));
                }
                Statement::Tactic {
                    name: name.to_string(),
                    args: args.to_string(),
                }
            }
            _ if TacticKind::from_name(keyword).is_some() => Statement::Tactic {
                name: keyword.to_string(),
                args: rest.to_string(),
            },
            _ => return Err(StatementError::Unrecognized(line.to_string())),
        };
        Ok(Some(statement))
    }
}
