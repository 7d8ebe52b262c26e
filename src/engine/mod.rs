use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::context::{Context, Hypothesis};
use crate::formula::Formula;
use crate::goal::Goal;
use crate::interfaces::GoalInfo;

pub mod error;
pub mod tactics;

pub use self::error::TacticError;
use self::tactics::TacticKind;

/// Settings that change which proofs the engine accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// By default the engine is lenient about resource discipline in a few places:
    ///   `trivial` closes a `1` goal no matter what hypotheses are left over,
    ///   `bang` strips the `!` from a goal without checking the context,
    ///   `init` discards any unused hypotheses.
    /// Strict mode requires the leftover or surrounding hypotheses to be exponentials.
    pub strict: bool,
}

/// A tactic that couldn't be applied, along with the goal it was applied to.
/// The goal is handed back untouched so it can go back on the queue.
#[derive(Debug)]
pub struct Rejected {
    pub goal: Goal,
    pub error: TacticError,
}

/// The state of one proof: the hypotheses declared so far, the open goals,
/// and the errors seen so far.
///
/// Goals are kept in a double-ended queue. The front goal is the current one.
/// A tactic pops the front goal and pushes its subgoals onto the front, in order,
/// so the first subgoal becomes the new current goal.
pub struct Engine {
    config: EngineConfig,

    // Hypotheses declared with `hyp`. Each new goal starts with a copy of these.
    global_hyps: Context,

    goals: VecDeque<Goal>,

    // Messages, each prefixed with the line that caused it.
    errors: Vec<String>,

    // Used to give every goal a distinct id.
    next_goal_id: usize,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Engine {
        Engine {
            config,
            global_hyps: Context::new(),
            goals: VecDeque::new(),
            errors: vec![],
            next_goal_id: 1,
        }
    }

    pub fn goals(&self) -> &VecDeque<Goal> {
        &self.goals
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Makes a new goal with a fresh id. It isn't queued yet.
    fn make_goal(&mut self, ctx: Context, target: Formula) -> Goal {
        let id = format!("g{}", self.next_goal_id);
        self.next_goal_id += 1;
        Goal { id, ctx, target }
    }

    /// Adds a hypothesis that every goal gets.
    /// Goals that are already open get it too.
    pub fn add_hyp(&mut self, name: &str, formula: Formula) {
        let hypothesis = Hypothesis::new(name, formula);
        for goal in self.goals.iter_mut() {
            goal.ctx.push(hypothesis.clone());
        }
        trace!(name, formula = %hypothesis.type_text, "added hypothesis");
        self.global_hyps.push(hypothesis);
    }

    /// Queues a new goal at the back, with its own copy of the global hypotheses.
    pub fn add_goal(&mut self, target: Formula) {
        let goal = self.make_goal(self.global_hyps.clone(), target);
        trace!(id = %goal.id, target = %goal.target, "added goal");
        self.goals.push_back(goal);
    }

    /// Records a problem with a line of the script.
    pub fn record_error(&mut self, line: usize, message: impl fmt::Display) {
        let message = format!("line {}: {}", line, message);
        debug!(message = %message, "recorded error");
        self.errors.push(message);
    }

    /// Applies a tactic to the current goal.
    /// The name is matched case-insensitively. The args are the raw text after the name.
    /// On failure the error is recorded and the goal queue is left exactly as it was.
    pub fn apply_tactic(&mut self, name: &str, args: &str, line: usize) {
        let Some(kind) = TacticKind::from_name(name) else {
            self.record_error(line, TacticError::UnknownTactic(name.to_string()));
            return;
        };
        let Some(goal) = self.goals.pop_front() else {
            self.record_error(line, format_args!("{}: {}", name, TacticError::NoGoals));
            return;
        };
        trace!(tactic = name, args, goal = %goal.id, line, "applying tactic");

        match self.run_tactic(kind, args, goal) {
            Ok(subgoals) => {
                trace!(tactic = name, subgoals = subgoals.len(), "tactic applied");
                for subgoal in subgoals.into_iter().rev() {
                    self.goals.push_front(subgoal);
                }
            }
            Err(Rejected { goal, error }) => {
                debug!(
                    tactic = name,
                    goal = %goal.id,
                    error_type = error.error_type(),
                    "tactic rejected"
                );
                self.goals.push_front(goal);
                self.record_error(line, format_args!("{}: {}", name, error));
            }
        }
    }

    /// Produces the displayable result of this proof.
    /// If anything went wrong, that's all we report.
    pub fn finalize(self) -> Vec<GoalInfo> {
        if !self.errors.is_empty() {
            return vec![GoalInfo::errors(&self.errors)];
        }
        self.goals.iter().map(|goal| goal.to_info()).collect()
    }
}
