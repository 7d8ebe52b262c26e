use std::fmt;

use crate::syntax::expression;
use crate::syntax::token::ParseError;

/// A formula of the linear-logic fragment we work with.
/// Formulas are built by the parser and never mutated afterwards.
/// Equality is structural, so two formulas are equal exactly when they print the same way.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Formula {
    /// A propositional atom. A negated atom is written with a trailing ⊥, like A⊥.
    Atom { name: String, negated: bool },

    /// The multiplicative units.
    One,
    Bot,

    /// The additive units.
    Top,
    Zero,

    /// The exponential "of course", !A.
    Bang(Box<Formula>),

    /// Multiplicative conjunction, A ⊗ B.
    Tensor(Box<Formula>, Box<Formula>),

    /// Additive disjunction, A ⊕ B.
    Plus(Box<Formula>, Box<Formula>),

    /// Additive conjunction, A & B.
    With(Box<Formula>, Box<Formula>),

    /// Linear implication, A ⊸ B.
    Lolli(Box<Formula>, Box<Formula>),
}

// Precedence levels used when printing.
// A subformula gets parentheses when its own level is below the level its parent demands.
const LOLLI: u8 = 0;
const WITH: u8 = 1;
const PLUS: u8 = 2;
const TENSOR: u8 = 3;
const UNARY: u8 = 4;

impl Formula {
    pub fn atom(name: &str) -> Formula {
        Formula::Atom {
            name: name.to_string(),
            negated: false,
        }
    }

    pub fn negated_atom(name: &str) -> Formula {
        Formula::Atom {
            name: name.to_string(),
            negated: true,
        }
    }

    pub fn bang(of: Formula) -> Formula {
        Formula::Bang(Box::new(of))
    }

    pub fn tensor(left: Formula, right: Formula) -> Formula {
        Formula::Tensor(Box::new(left), Box::new(right))
    }

    pub fn plus(left: Formula, right: Formula) -> Formula {
        Formula::Plus(Box::new(left), Box::new(right))
    }

    pub fn with(left: Formula, right: Formula) -> Formula {
        Formula::With(Box::new(left), Box::new(right))
    }

    pub fn lolli(left: Formula, right: Formula) -> Formula {
        Formula::Lolli(Box::new(left), Box::new(right))
    }

    /// Parses an entire string as a formula.
    pub fn parse(text: &str) -> Result<Formula, ParseError> {
        expression::parse_formula(text)
    }

    pub fn is_bang(&self) -> bool {
        matches!(self, Formula::Bang(_))
    }

    /// The name of the outermost connective, for error messages.
    pub fn connective(&self) -> &'static str {
        match self {
            Formula::Atom { .. } => "atom",
            Formula::One => "one",
            Formula::Bot => "bot",
            Formula::Top => "top",
            Formula::Zero => "zero",
            Formula::Bang(_) => "bang",
            Formula::Tensor(..) => "tensor",
            Formula::Plus(..) => "plus",
            Formula::With(..) => "with",
            Formula::Lolli(..) => "lolli",
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Formula::Lolli(..) => LOLLI,
            Formula::With(..) => WITH,
            Formula::Plus(..) => PLUS,
            Formula::Tensor(..) => TENSOR,
            _ => UNARY,
        }
    }

    // Writes this formula, parenthesized if the surrounding context binds tighter than it does.
    fn write_at(&self, f: &mut fmt::Formatter, context: u8) -> fmt::Result {
        let parens = self.precedence() < context;
        if parens {
            write!(f, "(")?;
        }
        match self {
            Formula::Atom { name, negated } => {
                write!(f, "{}", name)?;
                if *negated {
                    write!(f, "⊥")?;
                }
            }
            Formula::One => write!(f, "1")?,
            Formula::Bot => write!(f, "⊥")?,
            Formula::Top => write!(f, "⊤")?,
            Formula::Zero => write!(f, "0")?,
            Formula::Bang(of) => {
                write!(f, "!")?;
                of.write_at(f, UNARY)?;
            }
            Formula::Tensor(left, right) => write_binary(f, left, "⊗", right, TENSOR)?,
            Formula::Plus(left, right) => write_binary(f, left, "⊕", right, PLUS)?,
            Formula::With(left, right) => write_binary(f, left, "&", right, WITH)?,
            Formula::Lolli(left, right) => {
                // Right associative, so only the left side needs to bind tighter.
                left.write_at(f, LOLLI + 1)?;
                write!(f, " ⊸ ")?;
                right.write_at(f, LOLLI)?;
            }
        }
        if parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

// Left associative binary operators keep a same-level left child bare
// and parenthesize a same-level right child.
fn write_binary(
    f: &mut fmt::Formatter,
    left: &Formula,
    symbol: &str,
    right: &Formula,
    level: u8,
) -> fmt::Result {
    left.write_at(f, level)?;
    write!(f, " {} ", symbol)?;
    right.write_at(f, level + 1)
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_at(f, LOLLI)
    }
}
