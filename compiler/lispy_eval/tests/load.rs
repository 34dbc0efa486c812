//! Loading source files.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::path::{Path, PathBuf};

use lispy_eval::{buffer_handler, Interpreter, InterpreterBuilder, Value};
use pretty_assertions::assert_eq;

const PRELUDE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/prelude.lspy");

fn interpreter() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

fn run(interp: &Interpreter, text: &str) -> String {
    interp.eval_source("<test>", text).unwrap().to_string()
}

fn write_source(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn load_prelude_defines_library() {
    let interp = interpreter();
    assert_eq!(interp.load(PRELUDE), Value::empty_sexpr());

    assert_eq!(run(&interp, "len {1 2 3}"), "3");
    assert_eq!(run(&interp, "reverse {1 2 3}"), "{3 2 1}");
    assert_eq!(run(&interp, r"map (\ {x} {* x 2}) {1 2 3}"), "{2 4 6}");
    assert_eq!(run(&interp, "sum {1 2 3 4}"), "10");
    assert_eq!(run(&interp, "curry + {5 6 7}"), "18");
    assert_eq!(run(&interp, "uncurry head 5 6 7"), "{5}");
}

#[test]
fn load_echoes_each_expression() {
    let interp = interpreter();
    interp.load(PRELUDE);

    let output = interp.print_handler().get_output();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "(def {nil} {})");
    assert_eq!(lines[12], "(fun {sum l} {foldl + 0 l})");
}

#[test]
fn load_reports_errors_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(
        dir.path(),
        "partial.lspy",
        "(def {a} 1)\n(+ a undefined)\n(def {b} 2)\n",
    );

    let interp = interpreter();
    assert_eq!(interp.load(path.to_str().unwrap()), Value::empty_sexpr());
    assert_eq!(
        interp.print_handler().get_output(),
        "(def {a} 1)\n(+ a undefined)\nError : Unbound symbol 'undefined'\n(def {b} 2)\n"
    );
    assert_eq!(run(&interp, "+ a b"), "3");
}

#[test]
fn load_parse_failure_evaluates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "broken.lspy", "(def {a} 1");
    let path = path.to_str().unwrap();

    let interp = interpreter();
    let result = interp.load(path);
    assert_eq!(
        result.to_string(),
        format!(
            "Error : Could not load Library {path}:1:11: error: expected ')' to close '(' opened at 1:1"
        )
    );
    assert_eq!(interp.print_handler().get_output(), "");
    assert_eq!(run(&interp, "a"), "Error : Unbound symbol 'a'");
}

#[test]
fn load_builtin_from_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "lib.lspy", "(def {answer} 42)");

    let interp = interpreter();
    let text = format!("load \"{}\"", path.to_str().unwrap());
    assert_eq!(run(&interp, &text), "()");
    assert_eq!(run(&interp, "answer"), "42");
}

#[test]
fn load_skips_comments() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "comments.lspy", "; header\n(def {c} 3) ; trailing\n");

    let interp = interpreter();
    interp.load(path.to_str().unwrap());
    assert_eq!(interp.print_handler().get_output(), "(def {c} 3)\n");
}
