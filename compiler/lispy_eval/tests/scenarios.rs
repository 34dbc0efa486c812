//! End-to-end evaluation scenarios.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lispy_eval::{buffer_handler, Interpreter, InterpreterBuilder, Value};
use pretty_assertions::assert_eq;

fn interpreter() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

fn run(interp: &Interpreter, text: &str) -> String {
    interp.eval_source("<test>", text).unwrap().to_string()
}

#[test]
fn sum_of_three() {
    assert_eq!(run(&interpreter(), "(+ 1 2 3)"), "6");
}

#[test]
fn head_of_list() {
    assert_eq!(run(&interpreter(), "(head {1 2 3})"), "{1}");
}

#[test]
fn def_then_lookup() {
    let interp = interpreter();
    assert_eq!(run(&interp, "(def {x} 5)"), "()");
    assert_eq!(run(&interp, "x"), "5");
}

#[test]
fn immediate_lambda_call() {
    assert_eq!(run(&interpreter(), r"((\ {x y} {+ x y}) 1 2)"), "3");
}

#[test]
fn divide_by_zero() {
    assert_eq!(
        run(&interpreter(), "(/ 10 0)"),
        "Error : Division By Zero."
    );
}

#[test]
fn numbers_equal() {
    assert_eq!(run(&interpreter(), "(== 1 1)"), "1");
}

#[test]
fn eval_of_list_matches_direct_evaluation() {
    let interp = interpreter();
    assert_eq!(
        run(&interp, "eval (list + 1 (* 2 3))"),
        run(&interp, "(+ 1 (* 2 3))")
    );
}

#[test]
fn nested_scopes_resolve_innermost_first() {
    let interp = interpreter();
    run(&interp, "def {x} 1");
    run(&interp, r"def {outer} (\ {x} {inner})");
    run(&interp, r"def {inner} (\ {} {x})");
    // `inner` has no formals, so `(inner)` is the closure itself.
    assert_eq!(run(&interp, "outer 2"), r"(\ {} {x})");
    run(&interp, r"def {show} (\ {x} {eval {x}})");
    assert_eq!(run(&interp, "show 2"), "2");
    assert_eq!(run(&interp, "x"), "1");
}

#[test]
fn def_is_global_from_any_depth() {
    let interp = interpreter();
    run(
        &interp,
        r"def {deep} (\ {a} {(\ {b} {def {found} (+ a b)}) 2})",
    );
    run(&interp, "deep 40");
    assert_eq!(run(&interp, "found"), "42");
}

#[test]
fn put_binds_in_nearest_frame() {
    let interp = interpreter();
    run(&interp, "def {x} 1");
    run(&interp, r"def {second} (\ {a b} {b})");
    run(&interp, r"def {shadow} (\ {y} {second (= {x} y) x})");
    assert_eq!(run(&interp, "shadow 3"), "3");
    assert_eq!(run(&interp, "x"), "1");

    assert_eq!(run(&interp, "= {x} 7"), "()");
    assert_eq!(run(&interp, "x"), "7");
}

#[test]
fn curried_call_matches_full_call() {
    let interp = interpreter();
    run(&interp, r"def {sub} (\ {a b} {- a b})");
    assert_eq!(run(&interp, "(sub 10) 3"), run(&interp, "sub 10 3"));
}

#[test]
fn variadic_binding() {
    let interp = interpreter();
    run(&interp, r"def {f} (\ {x & xs} {list x xs})");
    assert_eq!(run(&interp, "f 1 2 3"), "{1 {2 3}}");
    assert_eq!(run(&interp, "f 1"), "{1 {}}");
}

#[test]
fn user_errors_propagate() {
    let interp = interpreter();
    run(
        &interp,
        r#"def {safe-div} (\ {a b} {if (== b 0) {error "no zero"} {/ a b}})"#,
    );
    assert_eq!(run(&interp, "safe-div 10 2"), "5");
    assert_eq!(run(&interp, "+ 1 (safe-div 1 0)"), "Error : no zero");
}

#[test]
fn strings_print_escaped() {
    let interp = interpreter();
    assert_eq!(run(&interp, r#""tab\there""#), r#""tab\there""#);
    run(&interp, r#"print "a\nb""#);
    assert_eq!(interp.print_handler().get_output(), "\"a\\nb\"\n");
}

#[test]
fn eval_returns_values_not_strings() {
    let interp = interpreter();
    assert_eq!(
        interp.eval_source("<test>", "list 1 2").unwrap(),
        Value::QExpr(vec![Value::Number(1), Value::Number(2)])
    );
}

#[test]
fn comments_are_ignored() {
    assert_eq!(run(&interpreter(), "+ 1 ; the rest is ignored\n 2"), "3");
}

#[test]
fn deep_nesting_grows_the_stack() {
    let depth = 2_000;
    let source = format!("{}0{}", "(+ 1 ".repeat(depth), ")".repeat(depth));
    assert_eq!(run(&interpreter(), &source), depth.to_string());
}

#[test]
fn deep_recursion_through_closures() {
    let interp = interpreter();
    run(
        &interp,
        r"def {count} (\ {n acc} {if (== n 0) {acc} {count (- n 1) (+ acc 1)}})",
    );
    assert_eq!(run(&interp, "count 1000 0"), "1000");
}
