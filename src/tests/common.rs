use crate::engine::{Engine, EngineConfig};
use crate::formula::Formula;
use crate::goal::Goal;

pub fn formula(text: &str) -> Formula {
    match Formula::parse(text) {
        Ok(f) => f,
        Err(e) => panic!("could not parse '{}': {}", text, e),
    }
}

/// An engine with the given hypotheses and a single goal.
pub fn engine_with(hyps: &[(&str, &str)], goal: &str) -> Engine {
    engine_with_config(EngineConfig::default(), hyps, goal)
}

pub fn strict_engine_with(hyps: &[(&str, &str)], goal: &str) -> Engine {
    engine_with_config(EngineConfig { strict: true }, hyps, goal)
}

fn engine_with_config(config: EngineConfig, hyps: &[(&str, &str)], goal: &str) -> Engine {
    let mut engine = Engine::new(config);
    for (name, text) in hyps {
        engine.add_hyp(name, formula(text));
    }
    engine.add_goal(formula(goal));
    engine
}

/// A goal as "name : type, name : type |- target", for compact comparisons.
pub fn show(goal: &Goal) -> String {
    let hyps: Vec<String> = goal
        .ctx
        .iter()
        .map(|h| format!("{} : {}", h.name, h.type_text))
        .collect();
    format!("{} |- {}", hyps.join(", "), goal.target)
}

/// Every open goal, front first.
pub fn show_all(engine: &Engine) -> Vec<String> {
    engine.goals().iter().map(show).collect()
}

/// Applies a tactic and insists that it worked.
pub fn apply_ok(engine: &mut Engine, tactic: &str, args: &str) {
    engine.apply_tactic(tactic, args, 1);
    if engine.has_errors() {
        panic!(
            "'{} {}' failed: {}",
            tactic,
            args,
            engine.errors().join("\n")
        );
    }
}

/// Applies a tactic and insists that it failed without touching the goals.
/// Returns the error message.
pub fn apply_bad(engine: &mut Engine, tactic: &str, args: &str) -> String {
    let before = engine.goals().clone();
    let errors_before = engine.errors().len();
    engine.apply_tactic(tactic, args, 7);
    assert_eq!(
        engine.errors().len(),
        errors_before + 1,
        "'{} {}' should have failed",
        tactic,
        args
    );
    assert_eq!(engine.goals(), &before, "a failed tactic changed the goals");
    engine.errors()[errors_before].clone()
}
