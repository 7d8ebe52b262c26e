use std::collections::HashSet;
use std::fmt;

use crate::formula::Formula;

/// A named assumption available to a goal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hypothesis {
    pub name: String,
    pub formula: Formula,

    /// The printed form of the formula, computed once when the hypothesis is created.
    pub type_text: String,
}

impl Hypothesis {
    pub fn new(name: impl Into<String>, formula: Formula) -> Hypothesis {
        let type_text = formula.to_string();
        Hypothesis {
            name: name.into(),
            formula,
            type_text,
        }
    }
}

/// Why a list of hypothesis names could not be used to split a context.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PartitionError {
    Unknown(String),
    Duplicate(String),
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartitionError::Unknown(name) => write!(f, "no hypothesis named '{}'", name),
            PartitionError::Duplicate(name) => {
                write!(f, "hypothesis '{}' is listed more than once", name)
            }
        }
    }
}

/// The hypotheses of a goal, in the order they were added.
/// The order only matters for display.
/// Each goal owns its own context, so changing one never affects another.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Context {
    hypotheses: Vec<Hypothesis>,
}

impl Context {
    pub fn new() -> Context {
        Context::default()
    }

    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hypothesis> {
        self.hypotheses.iter()
    }

    pub fn push(&mut self, hypothesis: Hypothesis) {
        self.hypotheses.push(hypothesis);
    }

    pub fn get(&self, name: &str) -> Option<&Hypothesis> {
        self.hypotheses.iter().find(|h| h.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The first hypothesis whose formula is exactly this one.
    pub fn find_formula(&self, formula: &Formula) -> Option<&Hypothesis> {
        self.hypotheses.iter().find(|h| &h.formula == formula)
    }

    /// A copy of this context without the named hypothesis.
    pub fn without(&self, name: &str) -> Context {
        Context {
            hypotheses: self
                .hypotheses
                .iter()
                .filter(|h| h.name != name)
                .cloned()
                .collect(),
        }
    }

    /// Whether every hypothesis is an exponential, other than the ones named in `except`.
    pub fn all_bang_except(&self, except: &[&str]) -> bool {
        self.hypotheses
            .iter()
            .all(|h| h.formula.is_bang() || except.contains(&h.name.as_str()))
    }

    /// The names of hypotheses that are not exponentials.
    pub fn linear_names(&self) -> Vec<&str> {
        self.hypotheses
            .iter()
            .filter(|h| !h.formula.is_bang())
            .map(|h| h.name.as_str())
            .collect()
    }

    /// Splits the context into the named hypotheses and everything else.
    /// Both halves keep the original order.
    pub fn partition(&self, names: &[&str]) -> Result<(Context, Context), PartitionError> {
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(*name) {
                return Err(PartitionError::Duplicate(name.to_string()));
            }
            if !self.contains(name) {
                return Err(PartitionError::Unknown(name.to_string()));
            }
        }
        let (chosen, rest): (Vec<Hypothesis>, Vec<Hypothesis>) = self
            .hypotheses
            .iter()
            .cloned()
            .partition(|h| seen.contains(h.name.as_str()));
        Ok((
            Context { hypotheses: chosen },
            Context { hypotheses: rest },
        ))
    }

    /// Generates `count` distinct names of the form base1, base2, ... that aren't in use.
    pub fn fresh_names(&self, base: &str, count: usize) -> Vec<String> {
        let mut answer = vec![];
        let mut suffix = 1;
        while answer.len() < count {
            let candidate = format!("{}{}", base, suffix);
            if !self.contains(&candidate) {
                answer.push(candidate);
            }
            suffix += 1;
        }
        answer
    }

    pub fn fresh_name(&self, base: &str) -> String {
        let mut names = self.fresh_names(base, 1);
        names.pop().unwrap_or_else(|| base.to_string())
    }
}

impl FromIterator<Hypothesis> for Context {
    fn from_iter<I: IntoIterator<Item = Hypothesis>>(iter: I) -> Self {
        Context {
            hypotheses: iter.into_iter().collect(),
        }
    }
}
