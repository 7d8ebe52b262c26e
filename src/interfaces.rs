// Interfaces between the proof engine and whatever displays its results.
// A display reads one ProofState per newline-terminated JSON line.
//
// The JSON shape is {"goals":[{"id":..,"hypotheses":[{"name":..,"type":..}],"target":..}]}.

use std::fmt;

use serde::{Deserialize, Serialize};

// One hypothesis, as the user sees it.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HypothesisInfo {
    pub name: String,

    // The printed formula.
    #[serde(rename = "type")]
    pub type_text: String,
}

// One open goal, as the user sees it.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInfo {
    // Qualified by the theorem name once a script has been interpreted, like "swap:g3".
    // When a theorem has errors, its only goal has the id "errors" and the messages as a target.
    pub id: String,

    pub hypotheses: Vec<HypothesisInfo>,

    pub target: String,
}

impl GoalInfo {
    // The stand-in goal reported instead of the real goals when anything went wrong.
    pub fn errors(messages: &[String]) -> GoalInfo {
        GoalInfo {
            id: "errors".to_string(),
            hypotheses: vec![],
            target: messages.join("\n"),
        }
    }
}

impl fmt::Display for GoalInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.id)?;
        for h in &self.hypotheses {
            writeln!(f, "  {} : {}", h.name, h.type_text)?;
        }
        writeln!(f, "  ────────")?;
        for line in self.target.lines() {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

// Everything a display needs to show the state of a whole script.
#[derive(Debug, Eq, PartialEq, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofState {
    pub goals: Vec<GoalInfo>,
}

impl ProofState {
    // The single-line JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
