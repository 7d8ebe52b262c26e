use std::fmt;

use crate::context::PartitionError;
use crate::syntax::token::ParseError;

/// The ways applying a tactic can fail.
/// None of these are fatal. The goal stays where it was and the script keeps going.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TacticError {
    /// There is no open goal to work on.
    NoGoals,

    /// The tactic name isn't one we know.
    UnknownTactic(String),

    /// The goal or a hypothesis doesn't have the shape the tactic needs.
    Precondition(String),

    /// An argument refers to a hypothesis that isn't in the context.
    UnknownHypothesis(String),

    /// A hypothesis name is listed twice, or a new name is already taken.
    DuplicateHypothesis(String),

    /// A required argument wasn't provided.
    MissingArgument(String),

    /// A formula in the arguments didn't parse.
    Parse(ParseError),
}

impl TacticError {
    pub fn precondition(message: impl Into<String>) -> TacticError {
        TacticError::Precondition(message.into())
    }

    pub fn missing(message: impl Into<String>) -> TacticError {
        TacticError::MissingArgument(message.into())
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            TacticError::NoGoals => "NoGoals",
            TacticError::UnknownTactic(_) => "UnknownTactic",
            TacticError::Precondition(_) => "Precondition",
            TacticError::UnknownHypothesis(_) => "UnknownHypothesis",
            TacticError::DuplicateHypothesis(_) => "DuplicateHypothesis",
            TacticError::MissingArgument(_) => "MissingArgument",
            TacticError::Parse(_) => "Parse",
        }
    }
}

impl From<PartitionError> for TacticError {
    fn from(error: PartitionError) -> Self {
        match error {
            PartitionError::Unknown(name) => TacticError::UnknownHypothesis(name),
            PartitionError::Duplicate(name) => TacticError::DuplicateHypothesis(name),
        }
    }
}

impl From<ParseError> for TacticError {
    fn from(error: ParseError) -> Self {
        TacticError::Parse(error)
    }
}

impl fmt::Display for TacticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TacticError::NoGoals => write!(f, "no goals"),
            TacticError::UnknownTactic(name) => write!(f, "unknown tactic '{}'", name),
            TacticError::Precondition(message) => write!(f, "{}", message),
            TacticError::UnknownHypothesis(name) => write!(f, "no hypothesis named '{}'", name),
            TacticError::DuplicateHypothesis(name) => {
                write!(f, "duplicate hypothesis name '{}'", name)
            }
            TacticError::MissingArgument(message) => write!(f, "{}", message),
            TacticError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}
