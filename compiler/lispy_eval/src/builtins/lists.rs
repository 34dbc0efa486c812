//! Q-expression operations: `list head tail eval join`.

use super::helpers::{non_empty_qexpr, single_qexpr, take_qexpr};
use crate::environment::Environment;
use crate::errors::EvalError;
use crate::interpreter::Interpreter;
use crate::value::Value;

pub(super) fn list(args: Vec<Value>) -> Value {
    Value::QExpr(args)
}

pub(super) fn head(args: Vec<Value>) -> Result<Value, EvalError> {
    let mut items = non_empty_qexpr("head", args)?;
    items.truncate(1);
    Ok(Value::QExpr(items))
}

pub(super) fn tail(args: Vec<Value>) -> Result<Value, EvalError> {
    let mut items = non_empty_qexpr("tail", args)?;
    items.remove(0);
    Ok(Value::QExpr(items))
}

/// Reinterpret a Q-expression as an S-expression and evaluate it in the
/// caller's environment.
pub(super) fn eval(
    interp: &Interpreter,
    env: &Environment,
    args: Vec<Value>,
) -> Result<Value, EvalError> {
    let items = single_qexpr("eval", args)?;
    Ok(interp.eval_in(env, Value::SExpr(items)))
}

pub(super) fn join(args: Vec<Value>) -> Result<Value, EvalError> {
    let mut joined = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        joined.extend(take_qexpr("join", index, arg)?);
    }
    Ok(Value::QExpr(joined))
}
