//! `if`, `print`, `error` and `load`.

use super::helpers::{exactly, take_number, take_qexpr, take_str};
use crate::environment::Environment;
use crate::errors::EvalError;
use crate::interpreter::Interpreter;
use crate::value::Value;

/// `(if cond {then} {else})`: only the selected branch is evaluated.
pub(super) fn if_(
    interp: &Interpreter,
    env: &Environment,
    args: Vec<Value>,
) -> Result<Value, EvalError> {
    let [cond, then, otherwise] = exactly::<3>("if", args)?;
    let cond = take_number("if", 0, &cond)?;
    let then = take_qexpr("if", 1, then)?;
    let otherwise = take_qexpr("if", 2, otherwise)?;

    let branch = if cond == 0 { otherwise } else { then };
    Ok(interp.eval_in(env, Value::SExpr(branch)))
}

/// Operands joined by single spaces, one line.
pub(super) fn print(interp: &Interpreter, args: &[Value]) -> Value {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    interp.print_handler().println(&line);
    Value::empty_sexpr()
}

/// `(error "text")`
pub(super) fn error(args: Vec<Value>) -> Result<Value, EvalError> {
    let [message] = exactly::<1>("error", args)?;
    let message = take_str("error", 0, message)?;
    Ok(Value::Error(EvalError::new(message)))
}

/// `(load "path")`
pub(super) fn load(
    interp: &Interpreter,
    env: &Environment,
    args: Vec<Value>,
) -> Result<Value, EvalError> {
    let [path] = exactly::<1>("load", args)?;
    let path = take_str("load", 0, path)?;
    Ok(interp.load_in(env, &path))
}
