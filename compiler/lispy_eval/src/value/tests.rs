use super::*;
use crate::errors::{division_by_zero, unbound_symbol};
use pretty_assertions::assert_eq;

fn num(n: i64) -> Value {
    Value::Number(n)
}

fn qexpr(items: Vec<Value>) -> Value {
    Value::QExpr(items)
}

#[test]
fn test_kind_names() {
    let cases = [
        (num(1), "Number"),
        (Value::Error(division_by_zero()), "Error"),
        (Value::symbol("x"), "Symbol"),
        (Value::string("s"), "String"),
        (Value::builtin(Builtin::Add), "Function"),
        (Value::empty_sexpr(), "S-Expression"),
        (Value::empty_qexpr(), "Q-Expression"),
    ];
    for (value, name) in cases {
        assert_eq!(value.kind().name(), name);
    }
}

#[test]
fn test_display_atoms() {
    assert_eq!(num(-42).to_string(), "-42");
    assert_eq!(Value::symbol("foo").to_string(), "foo");
    assert_eq!(
        Value::Error(unbound_symbol("y")).to_string(),
        "Error : Unbound symbol 'y'"
    );
}

#[test]
fn test_display_string_is_quoted_and_escaped() {
    assert_eq!(
        Value::string("say \"hi\"\n").to_string(),
        r#""say \"hi\"\n""#
    );
}

#[test]
fn test_display_containers() {
    let value = Value::SExpr(vec![
        Value::symbol("+"),
        num(1),
        qexpr(vec![num(2), num(3)]),
        Value::empty_sexpr(),
    ]);
    assert_eq!(value.to_string(), "(+ 1 {2 3} ())");
    assert_eq!(Value::empty_qexpr().to_string(), "{}");
}

#[test]
fn test_display_functions() {
    assert_eq!(Value::builtin(Builtin::Head).to_string(), "<builtin>");

    let closure = Closure::new(
        vec!["x".to_string(), "y".to_string()],
        vec![Value::symbol("+"), Value::symbol("x"), Value::symbol("y")],
    );
    assert_eq!(Value::closure(closure).to_string(), r"(\ {x y} {+ x y})");
}

#[test]
fn test_equality_different_kinds() {
    assert_ne!(num(1), Value::symbol("1"));
    assert_ne!(Value::symbol("a"), Value::string("a"));
    assert_ne!(Value::empty_sexpr(), Value::empty_qexpr());
}

#[test]
fn test_equality_is_structural() {
    let a = qexpr(vec![num(1), qexpr(vec![Value::symbol("x")])]);
    let b = qexpr(vec![num(1), qexpr(vec![Value::symbol("x")])]);
    let c = qexpr(vec![num(1)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_builtins_compare_by_identity() {
    assert_eq!(Value::builtin(Builtin::Add), Value::builtin(Builtin::Add));
    assert_ne!(Value::builtin(Builtin::Add), Value::builtin(Builtin::Sub));

    let closure = Closure::new(vec![], vec![num(1)]);
    assert_ne!(Value::builtin(Builtin::Add), Value::closure(closure));
}

#[test]
fn test_closure_equality_ignores_frame() {
    let body = vec![Value::symbol("x")];
    let plain = Closure::new(vec!["x".to_string()], body.clone());
    let mut bound = Closure::new(vec!["x".to_string()], body);
    bound.frame.put("unrelated", num(9));

    assert_eq!(Value::closure(plain), Value::closure(bound));
}

#[test]
fn test_closure_clone_copies_frame() {
    let mut original = Closure::new(vec!["y".to_string()], vec![Value::symbol("y")]);
    original.frame.put("x", num(1));

    let mut copy = original.clone();
    copy.frame.put("x", num(2));

    assert_eq!(original.frame().get_local("x"), Some(&num(1)));
    assert_eq!(copy.frame().get_local("x"), Some(&num(2)));
}

#[test]
fn test_error_equality_by_message() {
    assert_eq!(
        Value::Error(division_by_zero()),
        Value::Error(EvalError::new("Division By Zero."))
    );
    assert_ne!(
        Value::Error(division_by_zero()),
        Value::Error(EvalError::new("other"))
    );
}

#[test]
fn test_conversions() {
    assert_eq!(Value::from(true), num(1));
    assert_eq!(Value::from(false), num(0));
    assert_eq!(Value::from(7_i64), num(7));
    let err = Value::from(division_by_zero());
    assert!(err.is_error());
    assert_eq!(err.as_error().map(|e| e.message.as_str()), Some("Division By Zero."));
    assert!(num(0).as_error().is_none());
}
