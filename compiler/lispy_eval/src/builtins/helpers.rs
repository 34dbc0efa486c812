//! Operand checks shared by the builtins.
//!
//! Each `take_*` check consumes the operand and hands back its payload, so a
//! passed check never needs a second match to get at the value.

use crate::errors::{empty_argument, wrong_arg_count, wrong_arg_type, EvalError};
use crate::value::{Value, ValueKind};

/// Exactly `expected` operands.
pub(super) fn expect_count(
    function: &'static str,
    args: &[Value],
    expected: usize,
) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(function, args.len(), expected))
    }
}

/// Exactly `N` operands, by value.
pub(super) fn exactly<const N: usize>(
    function: &'static str,
    args: Vec<Value>,
) -> Result<[Value; N], EvalError> {
    <[Value; N]>::try_from(args).map_err(|args| wrong_arg_count(function, args.len(), N))
}

/// Operand `index` as a Q-expression's elements.
pub(super) fn take_qexpr(
    function: &'static str,
    index: usize,
    value: Value,
) -> Result<Vec<Value>, EvalError> {
    match value {
        Value::QExpr(items) => Ok(items),
        other => Err(wrong_arg_type(
            function,
            index,
            other.kind(),
            ValueKind::QExpr,
        )),
    }
}

/// Operand `index` as a number.
pub(super) fn take_number(
    function: &'static str,
    index: usize,
    value: &Value,
) -> Result<i64, EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(wrong_arg_type(
            function,
            index,
            other.kind(),
            ValueKind::Number,
        )),
    }
}

/// Operand `index` as a string's text.
pub(super) fn take_str(
    function: &'static str,
    index: usize,
    value: Value,
) -> Result<String, EvalError> {
    match value {
        Value::Str(text) => Ok(text),
        other => Err(wrong_arg_type(function, index, other.kind(), ValueKind::Str)),
    }
}

/// The single Q-expression operand.
pub(super) fn single_qexpr(
    function: &'static str,
    args: Vec<Value>,
) -> Result<Vec<Value>, EvalError> {
    let [arg] = exactly::<1>(function, args)?;
    take_qexpr(function, 0, arg)
}

/// The single Q-expression operand, which must have elements.
pub(super) fn non_empty_qexpr(
    function: &'static str,
    args: Vec<Value>,
) -> Result<Vec<Value>, EvalError> {
    let items = single_qexpr(function, args)?;
    if items.is_empty() {
        return Err(empty_argument(function, 0));
    }
    Ok(items)
}

/// Every operand's number, checking kinds left to right.
pub(super) fn numbers(function: &'static str, args: &[Value]) -> Result<Vec<i64>, EvalError> {
    args.iter()
        .enumerate()
        .map(|(index, value)| take_number(function, index, value))
        .collect()
}
