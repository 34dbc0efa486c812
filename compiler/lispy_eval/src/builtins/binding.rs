//! `\`, `def` and `=`.

use super::helpers::{exactly, take_qexpr};
use crate::environment::Environment;
use crate::errors::{
    define_arity_mismatch, define_non_symbol, lambda_non_symbol, wrong_arg_count, EvalError,
};
use crate::value::{Closure, Value};

/// `(\ {formals} {body})`: a closure with an empty frame.
pub(super) fn lambda(args: Vec<Value>) -> Result<Value, EvalError> {
    let [formals, body] = exactly::<2>("\\", args)?;
    let formals = take_qexpr("\\", 0, formals)?;
    let body = take_qexpr("\\", 1, body)?;

    let formals = formals
        .into_iter()
        .map(|formal| match formal {
            Value::Symbol(name) => Ok(name),
            other => Err(lambda_non_symbol(other.kind())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Value::closure(Closure::new(formals, body)))
}

/// `(def {names...} values...)`: bind in the root frame.
pub(super) fn define(env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let bindings = pair_symbols("def", args)?;
    for (name, value) in bindings {
        tracing::debug!(%name, "def");
        env.define_global(name, value);
    }
    Ok(Value::empty_sexpr())
}

/// `(= {names...} values...)`: bind in the caller's frame.
pub(super) fn put(env: &Environment, args: Vec<Value>) -> Result<Value, EvalError> {
    let bindings = pair_symbols("=", args)?;
    for (name, value) in bindings {
        tracing::debug!(%name, "put");
        env.put(name, value);
    }
    Ok(Value::empty_sexpr())
}

/// Validate a `{names...} values...` operand list and pair it up.
fn pair_symbols(
    function: &'static str,
    args: Vec<Value>,
) -> Result<Vec<(String, Value)>, EvalError> {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Err(wrong_arg_count(function, 0, 1));
    };
    let symbols = take_qexpr(function, 0, first)?;
    let values: Vec<Value> = args.collect();

    let names = symbols
        .into_iter()
        .map(|symbol| match symbol {
            Value::Symbol(name) => Ok(name),
            other => Err(define_non_symbol(function, other.kind())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if names.len() != values.len() {
        return Err(define_arity_mismatch(function, names.len(), values.len()));
    }

    Ok(names.into_iter().zip(values).collect())
}
