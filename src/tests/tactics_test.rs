// Tests for the individual tactic rules.

use crate::tests::common::{apply_bad, apply_ok, engine_with, show_all, strict_engine_with};

#[test]
fn test_init_named() {
    let mut engine = engine_with(&[("h", "A")], "A");
    apply_ok(&mut engine, "init", "h");
    assert!(engine.goals().is_empty());
    assert!(engine.errors().is_empty());
}

#[test]
fn test_init_bare_searches_context() {
    let mut engine = engine_with(&[("x", "B"), ("y", "A ⊗ B")], "A tensor B");
    apply_ok(&mut engine, "axiom", "");
    assert!(engine.goals().is_empty());
}

#[test]
fn test_init_mismatch() {
    let mut engine = engine_with(&[("h", "A"), ("k", "B")], "B");
    let message = apply_bad(&mut engine, "init", "h");
    assert_eq!(message, "line 7: init: h : A does not match the goal B");
    let mut engine = engine_with(&[("h", "A⊥")], "A");
    apply_bad(&mut engine, "init", "");
}

#[test]
fn test_tensor_split_partitions() {
    let mut engine = engine_with(&[("x", "A"), ("y", "B")], "A ⊗ B");
    apply_ok(&mut engine, "split", "x");
    assert_eq!(show_all(&engine), vec!["x : A |- A", "y : B |- B"]);
    apply_ok(&mut engine, "init", "x");
    apply_ok(&mut engine, "init", "y");
    assert!(engine.goals().is_empty());
}

#[test]
fn test_tensor_split_without_names() {
    let mut engine = engine_with(&[("x", "A"), ("y", "B")], "A ⊗ B");
    apply_ok(&mut engine, "tensor", "");
    assert_eq!(show_all(&engine), vec![" |- A", "x : A, y : B |- B"]);
}

#[test]
fn test_tensor_split_bad_names() {
    let mut engine = engine_with(&[("x", "A"), ("y", "B")], "A ⊗ B");
    let message = apply_bad(&mut engine, "split", "z");
    assert_eq!(message, "line 7: split: no hypothesis named 'z'");
    let message = apply_bad(&mut engine, "split", "x, x");
    assert_eq!(message, "line 7: split: duplicate hypothesis name 'x'");
    apply_bad(&mut engine, "with", "");
}

#[test]
fn test_with_split_copies_context() {
    let mut engine = engine_with(&[("x", "C")], "A & B");
    apply_ok(&mut engine, "with", "");
    assert_eq!(show_all(&engine), vec!["x : C |- A", "x : C |- B"]);
    let mut engine = engine_with(&[("x", "C")], "A with B");
    apply_ok(&mut engine, "&", "");
    assert_eq!(engine.goals().len(), 2);
    apply_bad(&mut engine, "tensor", "");
}

#[test]
fn test_plus_branches() {
    let mut engine = engine_with(&[("x", "C")], "A ⊕ B");
    apply_ok(&mut engine, "inl", "");
    assert_eq!(show_all(&engine), vec!["x : C |- A"]);
    let mut engine = engine_with(&[("x", "C")], "A ⊕ B");
    apply_ok(&mut engine, "plus_right", "");
    assert_eq!(show_all(&engine), vec!["x : C |- B"]);
    let mut engine = engine_with(&[], "A & B");
    let message = apply_bad(&mut engine, "left", "");
    assert_eq!(message, "line 7: left: left needs a plus goal, but the goal is A & B");
}

#[test]
fn test_bang_goal() {
    let mut engine = engine_with(&[("x", "A")], "!A");
    apply_ok(&mut engine, "bang", "");
    assert_eq!(show_all(&engine), vec!["x : A |- A"]);
}

#[test]
fn test_bang_hypothesis_derelicts() {
    let mut engine = engine_with(&[("h", "!A")], "A ⊗ A");
    apply_ok(&mut engine, "!", "h");
    assert_eq!(show_all(&engine), vec!["h : !A, h1 : A |- A ⊗ A"]);
    apply_ok(&mut engine, "bang", "h");
    assert_eq!(show_all(&engine), vec!["h : !A, h1 : A, h2 : A |- A ⊗ A"]);
    let mut engine = engine_with(&[("h", "A")], "A");
    apply_bad(&mut engine, "bang", "h");
}

#[test]
fn test_derelict_needs_exponential_context() {
    let mut engine = engine_with(&[("h", "!A")], "!A");
    apply_ok(&mut engine, "derelict", "");
    assert_eq!(show_all(&engine), vec!["h : !A |- A"]);
    let mut engine = engine_with(&[("h", "!A"), ("k", "B")], "!A");
    let message = apply_bad(&mut engine, "derelict", "");
    assert_eq!(
        message,
        "line 7: derelict: derelict needs every hypothesis to be exponential, but these are not: k"
    );
}

#[test]
fn test_trivial() {
    let mut engine = engine_with(&[("x", "A")], "1");
    apply_ok(&mut engine, "trivial", "");
    assert!(engine.goals().is_empty());
    let mut engine = engine_with(&[("x", "A")], "top");
    apply_ok(&mut engine, "trivial", "");
    assert!(engine.goals().is_empty());
    let mut engine = engine_with(&[], "0");
    apply_bad(&mut engine, "trivial", "");
}

#[test]
fn test_destruct_tensor() {
    let mut engine = engine_with(&[("y", "C"), ("h", "A ⊗ B")], "B ⊗ A");
    apply_ok(&mut engine, "destruct", "h");
    assert_eq!(show_all(&engine), vec!["y : C, h1 : A, h2 : B |- B ⊗ A"]);
}

#[test]
fn test_destruct_with_branch() {
    let mut engine = engine_with(&[("h", "A & B")], "B");
    apply_ok(&mut engine, "destruct", "h right");
    assert_eq!(show_all(&engine), vec!["h1 : B |- B"]);
    let mut engine = engine_with(&[("h", "A & B")], "A");
    apply_ok(&mut engine, "destruct", "left h");
    assert_eq!(show_all(&engine), vec!["h1 : A |- A"]);
    let mut engine = engine_with(&[("h", "A & B")], "A");
    let message = apply_bad(&mut engine, "destruct", "h");
    assert_eq!(
        message,
        "line 7: destruct: destruct on h : A & B needs 'left' or 'right'"
    );
}

#[test]
fn test_destruct_plus() {
    let mut engine = engine_with(&[("h", "A ⊕ B"), ("y", "C")], "D");
    apply_ok(&mut engine, "destruct", "h y");
    assert_eq!(show_all(&engine), vec!["y : C, h1 : A |- D", "y : C, h2 : B |- D"]);
}

#[test]
fn test_destruct_lolli() {
    let mut engine = engine_with(&[("x", "A"), ("f", "A ⊸ B"), ("y", "C")], "B ⊗ C");
    apply_ok(&mut engine, "destruct", "f x");
    assert_eq!(show_all(&engine), vec!["x : A |- A", "y : C, f1 : B |- B ⊗ C"]);
    let mut engine = engine_with(&[("x", "A"), ("f", "A ⊸ B")], "B");
    apply_bad(&mut engine, "destruct", "f w");
    apply_bad(&mut engine, "destruct", "f x x");
}

#[test]
fn test_destruct_errors() {
    let mut engine = engine_with(&[("x", "A")], "A");
    let message = apply_bad(&mut engine, "destruct", "");
    assert_eq!(message, "line 7: destruct: destruct needs a hypothesis name");
    let message = apply_bad(&mut engine, "destruct", "q");
    assert_eq!(message, "line 7: destruct: no hypothesis named 'q'");
    let message = apply_bad(&mut engine, "destruct", "x");
    assert_eq!(message, "line 7: destruct: destruct cannot be used on x : A");
}

#[test]
fn test_destruct_unknown_name_comes_first() {
    let mut engine = engine_with(&[("x", "A ⊗ B"), ("y", "C")], "D");
    let message = apply_bad(&mut engine, "destruct", "typo x");
    assert_eq!(message, "line 7: destruct: no hypothesis named 'typo'");
    let mut engine = engine_with(&[("f", "A ⊸ B"), ("x", "A")], "B");
    let message = apply_bad(&mut engine, "destruct", "g f x");
    assert_eq!(message, "line 7: destruct: no hypothesis named 'g'");
    // A branch word only goes first when a with hypothesis follows it.
    let mut engine = engine_with(&[("x", "A ⊗ B")], "D");
    let message = apply_bad(&mut engine, "destruct", "left x");
    assert_eq!(message, "line 7: destruct: no hypothesis named 'left'");
}

#[test]
fn test_cases_on_plus() {
    let mut engine = engine_with(&[("h", "A ⊕ B"), ("y", "C"), ("h1", "E")], "D");
    apply_ok(&mut engine, "cases", "h");
    assert_eq!(
        show_all(&engine),
        vec!["y : C, h1 : E, h2 : A |- D", "y : C, h1 : E, h3 : B |- D"]
    );
    let mut engine = engine_with(&[("h", "A ⊗ B")], "D");
    apply_bad(&mut engine, "cases", "h");
}

#[test]
fn test_assume_is_a_cut() {
    let mut engine = engine_with(&[("x", "A"), ("y", "B"), ("z", "C")], "D");
    apply_ok(&mut engine, "assume", "c : A ⊗ B x y");
    assert_eq!(
        show_all(&engine),
        vec!["x : A, y : B |- A ⊗ B", "z : C, c : A ⊗ B |- D"]
    );
}

#[test]
fn test_assume_without_hypotheses() {
    let mut engine = engine_with(&[("x", "A")], "D");
    apply_ok(&mut engine, "assume", "c: (A ⊸ B) with 1");
    assert_eq!(
        show_all(&engine),
        vec![" |- (A ⊸ B) & 1", "x : A, c : (A ⊸ B) & 1 |- D"]
    );
}

#[test]
fn test_assume_errors() {
    let mut engine = engine_with(&[("x", "A")], "D");
    apply_bad(&mut engine, "assume", "c A");
    apply_bad(&mut engine, "assume", "c : ⊗ A");
    apply_bad(&mut engine, "assume", "c : A w");
    let message = apply_bad(&mut engine, "assume", "x : A");
    assert_eq!(message, "line 7: assume: duplicate hypothesis name 'x'");
    let message = apply_bad(&mut engine, "assume", "with : A");
    assert_eq!(
        message,
        "line 7: assume: 'with' can't be used as a hypothesis name"
    );
}

#[test]
fn test_assume_names_after_formula() {
    let mut engine = engine_with(&[("x", "A"), ("y", "B")], "D");
    apply_ok(&mut engine, "assume", "c : A ⊗ B x, y");
    assert_eq!(show_all(&engine), vec!["x : A, y : B |- A ⊗ B", "c : A ⊗ B |- D"]);
}

#[test]
fn test_intro() {
    let mut engine = engine_with(&[("x", "C")], "A ⊸ B ⊸ C");
    apply_ok(&mut engine, "intro", "a");
    apply_ok(&mut engine, "intro", "");
    assert_eq!(show_all(&engine), vec!["x : C, a : A, h1 : B |- C"]);
    let mut engine = engine_with(&[("a", "C")], "A ⊸ B");
    apply_bad(&mut engine, "intro", "a");
    let message = apply_bad(&mut engine, "intro", "plus");
    assert_eq!(message, "line 7: intro: 'plus' can't be used as a hypothesis name");
    let message = apply_bad(&mut engine, "intro", "b c");
    assert_eq!(message, "line 7: intro: intro takes at most one name, but got 'b c'");
    let mut engine = engine_with(&[], "A ⊗ B");
    let message = apply_bad(&mut engine, "intro", "a");
    assert_eq!(message, "line 7: intro: intro needs a lolli goal, but the goal is A ⊗ B");
}

#[test]
fn test_apply() {
    let mut engine = engine_with(&[("h", "A ⊸ B"), ("y", "C")], "B");
    apply_ok(&mut engine, "apply", "h");
    assert_eq!(show_all(&engine), vec!["y : C |- A"]);
}

#[test]
fn test_apply_wrong_conclusion() {
    let mut engine = engine_with(&[("h", "A ⊸ B")], "C");
    let message = apply_bad(&mut engine, "apply", "h");
    assert_eq!(
        message,
        "line 7: apply: h : A ⊸ B does not conclude the goal C"
    );
    assert_eq!(engine.goals().len(), 1);
    let mut engine = engine_with(&[("h", "A ⊗ B")], "B");
    apply_bad(&mut engine, "apply", "h");
}

#[test]
fn test_strict_trivial() {
    let mut engine = strict_engine_with(&[("x", "A")], "1");
    let message = apply_bad(&mut engine, "trivial", "");
    assert_eq!(message, "line 7: trivial: trivial would leave unused hypotheses: x");
    let mut engine = strict_engine_with(&[("x", "!A")], "1");
    apply_ok(&mut engine, "trivial", "");
    let mut engine = strict_engine_with(&[("x", "A")], "⊤");
    apply_ok(&mut engine, "trivial", "");
}

#[test]
fn test_strict_bang_goal() {
    let mut engine = strict_engine_with(&[("x", "A")], "!A");
    apply_bad(&mut engine, "bang", "");
    let mut engine = strict_engine_with(&[("x", "!A")], "!A");
    apply_ok(&mut engine, "bang", "");
    assert_eq!(show_all(&engine), vec!["x : !A |- A"]);
}

#[test]
fn test_strict_init() {
    let mut engine = strict_engine_with(&[("x", "A"), ("y", "B")], "A");
    let message = apply_bad(&mut engine, "init", "x");
    assert_eq!(message, "line 7: init: init would leave unused hypotheses: y");
    let mut engine = strict_engine_with(&[("x", "A"), ("y", "!B")], "A");
    apply_ok(&mut engine, "init", "");
}
