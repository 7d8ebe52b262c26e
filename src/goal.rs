use crate::context::Context;
use crate::formula::Formula;
use crate::interfaces::{GoalInfo, HypothesisInfo};

/// Something left to prove: the target, using exactly the hypotheses in the context.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Goal {
    pub id: String,
    pub ctx: Context,
    pub target: Formula,
}

impl Goal {
    /// The displayable form of this goal.
    pub fn to_info(&self) -> GoalInfo {
        GoalInfo {
            id: self.id.clone(),
            hypotheses: self
                .ctx
                .iter()
                .map(|h| HypothesisInfo {
                    name: h.name.clone(),
                    type_text: h.type_text.clone(),
                })
                .collect(),
            target: self.target.to_string(),
        }
    }
}
