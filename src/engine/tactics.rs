// The tactic rule table.
// Each rule looks at the current goal and either produces its subgoals or explains
// why it doesn't apply.

use crate::context::{Context, Hypothesis};
use crate::engine::{Engine, Rejected, TacticError};
use crate::formula::Formula;
use crate::goal::Goal;
use crate::syntax::expression::parse_formula_prefix;
use crate::syntax::token::is_name;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TacticKind {
    Init,
    Split,
    Tensor,
    With,
    Left,
    Right,
    Bang,
    Derelict,
    Trivial,
    Destruct,
    Cases,
    Assume,
    Intro,
    Apply,
}

impl TacticKind {
    /// Looks up a tactic by any of its names, ignoring case.
    pub fn from_name(name: &str) -> Option<TacticKind> {
        let kind = match name.to_lowercase().as_str() {
            "init" | "axiom" => TacticKind::Init,
            "split" => TacticKind::Split,
            "tensor" => TacticKind::Tensor,
            "with" | "&" => TacticKind::With,
            "left" | "inl" | "plus_left" => TacticKind::Left,
            "right" | "inr" | "plus_right" => TacticKind::Right,
            "bang" | "!" => TacticKind::Bang,
            "derelict" => TacticKind::Derelict,
            "trivial" => TacticKind::Trivial,
            "destruct" => TacticKind::Destruct,
            "cases" => TacticKind::Cases,
            "assume" => TacticKind::Assume,
            "intro" => TacticKind::Intro,
            "apply" => TacticKind::Apply,
            _ => return None,
        };
        Some(kind)
    }
}

// Arguments are separated by whitespace or commas.
fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect()
}

fn no_args(tactic: &str, words: &[&str]) -> Result<(), TacticError> {
    if words.is_empty() {
        Ok(())
    } else {
        Err(TacticError::precondition(format!(
            "{} takes no arguments, but got '{}'",
            tactic,
            words.join(" ")
        )))
    }
}

fn one_hyp<'a>(tactic: &str, words: &[&'a str]) -> Result<&'a str, TacticError> {
    match words {
        [name] => Ok(*name),
        [] => Err(TacticError::missing(format!(
            "{} needs a hypothesis name",
            tactic
        ))),
        _ => Err(TacticError::precondition(format!(
            "{} takes one hypothesis name, but got '{}'",
            tactic,
            words.join(" ")
        ))),
    }
}

fn lookup<'a>(ctx: &'a Context, name: &str) -> Result<&'a Hypothesis, TacticError> {
    ctx.get(name)
        .ok_or_else(|| TacticError::UnknownHypothesis(name.to_string()))
}

fn wrong_goal(tactic: &str, wanted: &str, target: &Formula) -> TacticError {
    TacticError::precondition(format!(
        "{} needs a {} goal, but the goal is {}",
        tactic, wanted, target
    ))
}

fn wrong_hyp(tactic: &str, hyp: &Hypothesis) -> TacticError {
    TacticError::precondition(format!(
        "{} cannot be used on {} : {}",
        tactic, hyp.name, hyp.type_text
    ))
}

fn bad_name(name: &str) -> TacticError {
    TacticError::precondition(format!("'{}' can't be used as a hypothesis name", name))
}

// Which side of a with hypothesis to keep.
fn branch_word(word: &str) -> Option<bool> {
    match word.to_lowercase().as_str() {
        "left" | "l" | "1" => Some(true),
        "right" | "r" | "2" => Some(false),
        _ => None,
    }
}

// The context plus some new hypotheses.
fn extended(mut ctx: Context, additions: Vec<Hypothesis>) -> Context {
    for h in additions {
        ctx.push(h);
    }
    ctx
}

impl Engine {
    /// Runs a tactic on a goal that has already been taken off the queue.
    pub(crate) fn run_tactic(
        &mut self,
        kind: TacticKind,
        args: &str,
        goal: Goal,
    ) -> Result<Vec<Goal>, Rejected> {
        let words = split_args(args);

        let result = match kind {
            // intro hands its context on to the subgoal, so it needs to own the goal.
            TacticKind::Intro => return self.intro(&words, goal),
            TacticKind::Init => self.init(&words, &goal),
            TacticKind::Split => match goal.target {
                Formula::With(..) => self.with_split(&words, &goal),
                _ => self.tensor_split("split", &words, &goal),
            },
            TacticKind::Tensor => self.tensor_split("tensor", &words, &goal),
            TacticKind::With => self.with_split(&words, &goal),
            TacticKind::Left => self.choose(true, &words, &goal),
            TacticKind::Right => self.choose(false, &words, &goal),
            TacticKind::Bang => self.bang(&words, &goal),
            TacticKind::Derelict => self.derelict(&words, &goal),
            TacticKind::Trivial => self.trivial(&words, &goal),
            TacticKind::Destruct => self.destruct(&words, &goal),
            TacticKind::Cases => self.cases(&words, &goal),
            TacticKind::Assume => self.assume(args, &goal),
            TacticKind::Apply => self.apply(&words, &goal),
        };
        result.map_err(|error| Rejected { goal, error })
    }

    // In strict mode, hypotheses left unused must be exponentials.
    fn check_leftovers(
        &self,
        tactic: &str,
        ctx: &Context,
        used: &[&str],
    ) -> Result<(), TacticError> {
        if !self.config.strict || ctx.all_bang_except(used) {
            return Ok(());
        }
        let leftovers: Vec<&str> = ctx
            .linear_names()
            .into_iter()
            .filter(|name| !used.contains(name))
            .collect();
        Err(TacticError::precondition(format!(
            "{} would leave unused hypotheses: {}",
            tactic,
            leftovers.join(", ")
        )))
    }

    /// init [h]: closes the goal with a hypothesis that is exactly the target.
    fn init(&mut self, words: &[&str], goal: &Goal) -> Result<Vec<Goal>, TacticError> {
        let hyp = match words {
            [] => goal.ctx.find_formula(&goal.target).ok_or_else(|| {
                TacticError::precondition(format!("no hypothesis matches the goal {}", goal.target))
            })?,
            [name] => {
                let hyp = lookup(&goal.ctx, name)?;
                if hyp.formula != goal.target {
                    return Err(TacticError::precondition(format!(
                        "{} : {} does not match the goal {}",
                        hyp.name, hyp.type_text, goal.target
                    )));
                }
                hyp
            }
            _ => {
                return Err(TacticError::precondition(format!(
                    "init takes at most one hypothesis name, but got '{}'",
                    words.join(" ")
                )))
            }
        };
        self.check_leftovers("init", &goal.ctx, &[hyp.name.as_str()])?;
        Ok(vec![])
    }

    /// split [names...] on A ⊗ B: the named hypotheses go to A, the rest to B.
    fn tensor_split(
        &mut self,
        tactic: &str,
        words: &[&str],
        goal: &Goal,
    ) -> Result<Vec<Goal>, TacticError> {
        let Formula::Tensor(left, right) = &goal.target else {
            return Err(wrong_goal(tactic, "tensor", &goal.target));
        };
        let (left_ctx, right_ctx) = goal.ctx.partition(words)?;
        Ok(vec![
            self.make_goal(left_ctx, (**left).clone()),
            self.make_goal(right_ctx, (**right).clone()),
        ])
    }

    /// split on A & B: both sides get the whole context.
    fn with_split(&mut self, words: &[&str], goal: &Goal) -> Result<Vec<Goal>, TacticError> {
        let Formula::With(left, right) = &goal.target else {
            return Err(wrong_goal("with", "with", &goal.target));
        };
        no_args("with", words)?;
        Ok(vec![
            self.make_goal(goal.ctx.clone(), (**left).clone()),
            self.make_goal(goal.ctx.clone(), (**right).clone()),
        ])
    }

    /// left or right on A ⊕ B.
    fn choose(
        &mut self,
        left: bool,
        words: &[&str],
        goal: &Goal,
    ) -> Result<Vec<Goal>, TacticError> {
        let tactic = if left { "left" } else { "right" };
        let Formula::Plus(a, b) = &goal.target else {
            return Err(wrong_goal(tactic, "plus", &goal.target));
        };
        no_args(tactic, words)?;
        let chosen = if left { a } else { b };
        Ok(vec![self.make_goal(goal.ctx.clone(), (**chosen).clone())])
    }

    /// bang with no arguments strips the ! from the goal.
    /// bang h, where h : !A, adds a new hypothesis for A and keeps h.
    fn bang(&mut self, words: &[&str], goal: &Goal) -> Result<Vec<Goal>, TacticError> {
        if words.is_empty() {
            let Formula::Bang(inner) = &goal.target else {
                return Err(wrong_goal("bang", "bang", &goal.target));
            };
            if self.config.strict && !goal.ctx.all_bang_except(&[]) {
                return Err(TacticError::precondition(format!(
                    "bang needs every hypothesis to be exponential, but these are not: {}",
                    goal.ctx.linear_names().join(", ")
                )));
            }
            return Ok(vec![self.make_goal(goal.ctx.clone(), (**inner).clone())]);
        }

        let name = one_hyp("bang", words)?;
        let hyp = lookup(&goal.ctx, name)?;
        let Formula::Bang(inner) = &hyp.formula else {
            return Err(wrong_hyp("bang", hyp));
        };
        let derived = Hypothesis::new(goal.ctx.fresh_name(name), (**inner).clone());
        let ctx = extended(goal.ctx.clone(), vec![derived]);
        Ok(vec![self.make_goal(ctx, goal.target.clone())])
    }

    /// derelict on !A, when every hypothesis is exponential.
    fn derelict(&mut self, words: &[&str], goal: &Goal) -> Result<Vec<Goal>, TacticError> {
        let Formula::Bang(inner) = &goal.target else {
            return Err(wrong_goal("derelict", "bang", &goal.target));
        };
        no_args("derelict", words)?;
        if !goal.ctx.all_bang_except(&[]) {
            return Err(TacticError::precondition(format!(
                "derelict needs every hypothesis to be exponential, but these are not: {}",
                goal.ctx.linear_names().join(", ")
            )));
        }
        Ok(vec![self.make_goal(goal.ctx.clone(), (**inner).clone())])
    }

    /// trivial closes 1 and ⊤.
    fn trivial(&mut self, words: &[&str], goal: &Goal) -> Result<Vec<Goal>, TacticError> {
        no_args("trivial", words)?;
        match goal.target {
            Formula::Top => Ok(vec![]),
            Formula::One => {
                self.check_leftovers("trivial", &goal.ctx, &[])?;
                Ok(vec![])
            }
            _ => Err(wrong_goal("trivial", "1 or ⊤", &goal.target)),
        }
    }

    /// destruct h [args...] breaks down a hypothesis according to its connective.
    fn destruct(&mut self, words: &[&str], goal: &Goal) -> Result<Vec<Goal>, TacticError> {
        if words.is_empty() {
            return Err(TacticError::missing("destruct needs a hypothesis name"));
        }

        // The hypothesis comes first, except that a branch word may come before a with hypothesis.
        let position = match words {
            [first, second, ..]
                if branch_word(first).is_some()
                    && !goal.ctx.contains(first)
                    && matches!(
                        goal.ctx.get(second).map(|h| &h.formula),
                        Some(Formula::With(..))
                    ) =>
            {
                1
            }
            _ => 0,
        };
        let name = words[position];
        let rest: Vec<&str> = words
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != position)
            .map(|(_, w)| *w)
            .collect();
        let hyp = lookup(&goal.ctx, name)?;
        let remaining = goal.ctx.without(name);

        match &hyp.formula {
            Formula::Tensor(a, b) => {
                let names = remaining.fresh_names(name, 2);
                let ctx = extended(
                    remaining,
                    vec![
                        Hypothesis::new(names[0].clone(), (**a).clone()),
                        Hypothesis::new(names[1].clone(), (**b).clone()),
                    ],
                );
                Ok(vec![self.make_goal(ctx, goal.target.clone())])
            }
            Formula::With(a, b) => {
                let left = rest
                    .iter()
                    .find_map(|w| branch_word(w))
                    .ok_or_else(|| {
                        TacticError::missing(format!(
                            "destruct on {} : {} needs 'left' or 'right'",
                            hyp.name, hyp.type_text
                        ))
                    })?;
                let chosen = if left { a } else { b };
                let new_name = remaining.fresh_name(name);
                let ctx = extended(remaining, vec![Hypothesis::new(new_name, (**chosen).clone())]);
                Ok(vec![self.make_goal(ctx, goal.target.clone())])
            }
            Formula::Plus(a, b) => Ok(self.case_split(name, remaining, a, b, &goal.target)),
            Formula::Lolli(a, b) => {
                let (chosen, unchosen) = remaining.partition(&rest)?;
                let new_name = unchosen.fresh_name(name);
                let ctx = extended(unchosen, vec![Hypothesis::new(new_name, (**b).clone())]);
                Ok(vec![
                    self.make_goal(chosen, (**a).clone()),
                    self.make_goal(ctx, goal.target.clone()),
                ])
            }
            _ => Err(wrong_hyp("destruct", hyp)),
        }
    }

    /// cases h, where h : A ⊕ B.
    fn cases(&mut self, words: &[&str], goal: &Goal) -> Result<Vec<Goal>, TacticError> {
        let name = one_hyp("cases", words)?;
        let hyp = lookup(&goal.ctx, name)?;
        let Formula::Plus(a, b) = &hyp.formula else {
            return Err(wrong_hyp("cases", hyp));
        };
        Ok(self.case_split(name, goal.ctx.without(name), a, b, &goal.target))
    }

    // One subgoal per side of a plus hypothesis, each with its own copy of the context.
    fn case_split(
        &mut self,
        name: &str,
        remaining: Context,
        a: &Formula,
        b: &Formula,
        target: &Formula,
    ) -> Vec<Goal> {
        let names = remaining.fresh_names(name, 2);
        let left_ctx = extended(
            remaining.clone(),
            vec![Hypothesis::new(names[0].clone(), a.clone())],
        );
        let right_ctx = extended(remaining, vec![Hypothesis::new(names[1].clone(), b.clone())]);
        vec![
            self.make_goal(left_ctx, target.clone()),
            self.make_goal(right_ctx, target.clone()),
        ]
    }

    /// assume c : F [names...] is a cut.
    /// First prove F from the named hypotheses, then prove the goal from the rest plus c : F.
    ///
    /// The formula is read as the longest prefix that parses, and whatever is left is the
    /// list of names. That relies on the grammar never accepting two identifiers in a row.
    fn assume(&mut self, args: &str, goal: &Goal) -> Result<Vec<Goal>, TacticError> {
        let usage = "expected 'assume <name> : <formula> [hypotheses...]'";
        let Some((name, rest)) = args.split_once(':') else {
            return Err(TacticError::missing(usage));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(TacticError::missing(usage));
        }
        if !is_name(name) {
            return Err(bad_name(name));
        }
        if goal.ctx.contains(name) {
            return Err(TacticError::DuplicateHypothesis(name.to_string()));
        }
        let (formula, remainder) = parse_formula_prefix(rest)?;
        let words = split_args(remainder);
        let (chosen, unchosen) = goal.ctx.partition(&words)?;
        let ctx = extended(unchosen, vec![Hypothesis::new(name, formula.clone())]);
        Ok(vec![
            self.make_goal(chosen, formula),
            self.make_goal(ctx, goal.target.clone()),
        ])
    }

    /// intro [name] on A ⊸ B moves the context into the subgoal, adding A.
    fn intro(&mut self, words: &[&str], goal: Goal) -> Result<Vec<Goal>, Rejected> {
        let name = match words {
            [] => Ok(goal.ctx.fresh_name("h")),
            [name] if goal.ctx.contains(name) => {
                Err(TacticError::DuplicateHypothesis(name.to_string()))
            }
            [name] if !is_name(name) => Err(bad_name(name)),
            [name] => Ok(name.to_string()),
            _ => Err(TacticError::precondition(format!(
                "intro takes at most one name, but got '{}'",
                words.join(" ")
            ))),
        };

        let Goal { id, mut ctx, target } = goal;
        match (target, name) {
            (Formula::Lolli(antecedent, consequent), Ok(name)) => {
                ctx.push(Hypothesis::new(name, *antecedent));
                Ok(vec![self.make_goal(ctx, *consequent)])
            }
            (target, name) => {
                let error = match name {
                    Err(error) if matches!(target, Formula::Lolli(..)) => error,
                    _ => wrong_goal("intro", "lolli", &target),
                };
                Err(Rejected {
                    goal: Goal { id, ctx, target },
                    error,
                })
            }
        }
    }

    /// apply h, where h : A ⊸ B and the goal is B, leaves A to prove.
    fn apply(&mut self, words: &[&str], goal: &Goal) -> Result<Vec<Goal>, TacticError> {
        let name = one_hyp("apply", words)?;
        let hyp = lookup(&goal.ctx, name)?;
        let Formula::Lolli(a, b) = &hyp.formula else {
            return Err(wrong_hyp("apply", hyp));
        };
        if **b != goal.target {
            return Err(TacticError::precondition(format!(
                "{} : {} does not conclude the goal {}",
                hyp.name, hyp.type_text, goal.target
            )));
        }
        Ok(vec![self.make_goal(goal.ctx.without(name), (**a).clone())])
    }
}
