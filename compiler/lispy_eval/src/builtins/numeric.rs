//! Arithmetic, ordering and equality.

use super::helpers::{expect_count, numbers};
use super::Builtin;
use crate::errors::{division_by_zero, integer_overflow, wrong_arg_count, EvalError};
use crate::value::Value;

/// `+ - * / %` folded left to right over all operands.
///
/// A lone operand to `-` is negated; a lone operand to the others is
/// returned unchanged.
pub(super) fn arithmetic(op: Builtin, args: &[Value]) -> Result<Value, EvalError> {
    let name = op.name();
    let operands = numbers(name, args)?;
    let Some((&first, rest)) = operands.split_first() else {
        return Err(wrong_arg_count(name, 0, 1));
    };

    if op == Builtin::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(integer_overflow);
    }

    rest.iter()
        .try_fold(first, |acc, &rhs| apply(op, acc, rhs))
        .map(Value::Number)
}

fn apply(op: Builtin, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
    if matches!(op, Builtin::Div | Builtin::Mod) && rhs == 0 {
        return Err(division_by_zero());
    }
    let result = match op {
        Builtin::Add => lhs.checked_add(rhs),
        Builtin::Sub => lhs.checked_sub(rhs),
        Builtin::Mul => lhs.checked_mul(rhs),
        Builtin::Div => lhs.checked_div(rhs),
        Builtin::Mod => Some(lhs.wrapping_rem(rhs)),
        _ => None,
    };
    result.ok_or_else(integer_overflow)
}

/// `> < >= <=` on exactly two numbers.
pub(super) fn ordering(op: Builtin, args: &[Value]) -> Result<Value, EvalError> {
    let name = op.name();
    expect_count(name, args, 2)?;
    let operands = numbers(name, args)?;
    let (lhs, rhs) = (operands[0], operands[1]);
    let result = match op {
        Builtin::Gt => lhs > rhs,
        Builtin::Lt => lhs < rhs,
        Builtin::Ge => lhs >= rhs,
        _ => lhs <= rhs,
    };
    Ok(Value::from(result))
}

/// `== !=` on exactly two values of any kind.
pub(super) fn equality(op: Builtin, args: &[Value]) -> Result<Value, EvalError> {
    expect_count(op.name(), args, 2)?;
    let equal = args[0] == args[1];
    Ok(Value::from(if op == Builtin::Eq { equal } else { !equal }))
}
