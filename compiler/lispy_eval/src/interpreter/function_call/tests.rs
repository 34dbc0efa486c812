use super::*;
use crate::print_handler::silent_handler;
use crate::InterpreterBuilder;
use pretty_assertions::assert_eq;

fn interpreter() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(silent_handler())
        .build()
}

fn run(interp: &Interpreter, text: &str) -> String {
    interp.eval_source("<test>", text).unwrap().to_string()
}

#[test]
fn test_saturated_call() {
    let interp = interpreter();
    assert_eq!(run(&interp, r"((\ {x y} {+ x y}) 1 2)"), "3");
}

#[test]
fn test_zero_formal_closure_is_returned_unchanged_without_args() {
    let interp = interpreter();
    run(&interp, r"def {f} (\ {} {+ 1 2})");
    // A lone element is returned, not called.
    assert_eq!(run(&interp, "(f)"), r"(\ {} {+ 1 2})");
}

#[test]
fn test_partial_application_returns_closure() {
    let interp = interpreter();
    run(&interp, r"def {add} (\ {x y} {+ x y})");
    assert_eq!(run(&interp, "add 1"), r"(\ {y} {+ x y})");
    run(&interp, "def {inc} (add 1)");
    assert_eq!(run(&interp, "inc 41"), "42");
    assert_eq!(run(&interp, "inc 1"), "2");
}

#[test]
fn test_partial_application_does_not_touch_original() {
    let interp = interpreter();
    run(&interp, r"def {add} (\ {x y} {+ x y})");
    run(&interp, "add 100");
    assert_eq!(run(&interp, "add 1 2"), "3");
    assert_eq!(run(&interp, "add"), r"(\ {x y} {+ x y})");
}

#[test]
fn test_too_many_arguments() {
    let interp = interpreter();
    assert_eq!(
        run(&interp, r"(\ {x} {x}) 1 2"),
        "Error : Function passed too many arguments. Got 2, Expected 1."
    );
}

#[test]
fn test_too_many_arguments_counts_remaining_formals() {
    let interp = interpreter();
    run(&interp, r"def {f} ((\ {a b} {+ a b}) 1)");
    assert_eq!(
        run(&interp, "f 1 2 3"),
        "Error : Function passed too many arguments. Got 3, Expected 1."
    );
}

#[test]
fn test_variadic_collects_rest() {
    let interp = interpreter();
    run(&interp, r"def {f} (\ {x & xs} {list x xs})");
    assert_eq!(run(&interp, "f 1 2 3"), "{1 {2 3}}");
    assert_eq!(run(&interp, "f 1"), "{1 {}}");
}

#[test]
fn test_variadic_only() {
    let interp = interpreter();
    run(&interp, r"def {all} (\ {& xs} {xs})");
    assert_eq!(run(&interp, "all 1 2"), "{1 2}");
    assert_eq!(run(&interp, "all"), r"(\ {& xs} {xs})");
}

#[test]
fn test_variadic_marker_needs_single_trailing_formal() {
    let interp = interpreter();
    let message = "Error : Function format invalid. Symbol '&' not followed by single symbol.";
    assert_eq!(run(&interp, r"(\ {&} {1}) 1"), message);
    assert_eq!(run(&interp, r"(\ {& a b} {1}) 1"), message);
    assert_eq!(run(&interp, r"(\ {x & a b} {1}) 1"), message);
}

#[test]
fn test_body_runs_in_callers_scope() {
    let interp = interpreter();
    run(&interp, "def {y} 10");
    assert_eq!(run(&interp, r"(\ {x} {+ x y}) 1"), "11");
}

#[test]
fn test_put_inside_body_is_local_to_call() {
    let interp = interpreter();
    run(&interp, r"def {f} (\ {x} {do-put x})");
    run(&interp, r"def {do-put} (\ {v} {= {local} v})");
    run(&interp, "f 5");
    assert_eq!(run(&interp, "local"), "Error : Unbound symbol 'local'");
}

#[test]
fn test_def_inside_body_is_global() {
    let interp = interpreter();
    run(&interp, r"def {set} (\ {v} {def {global} v})");
    run(&interp, "set 7");
    assert_eq!(run(&interp, "global"), "7");
}

#[test]
fn test_recursion() {
    let interp = interpreter();
    run(
        &interp,
        r"def {fact} (\ {n} {if (<= n 1) {1} {* n (fact (- n 1))}})",
    );
    assert_eq!(run(&interp, "fact 10"), "3628800");
}

#[test]
fn test_bound_arguments_shadow_globals() {
    let interp = interpreter();
    run(&interp, "def {x} 1");
    assert_eq!(run(&interp, r"(\ {x} {x}) 2"), "2");
    assert_eq!(run(&interp, "x"), "1");
}
