//! Runtime values.
//!
//! Containers own their elements outright and `Clone` is always a deep
//! copy, so no two values ever alias. A closure's clone copies its frame
//! too, giving the copy an independent scope.

use std::fmt;

use crate::builtins::Builtin;
use crate::environment::Scope;
use crate::errors::EvalError;

/// Formal parameter name that collects the remaining arguments.
pub const VARIADIC_MARKER: &str = "&";

/// A Lispy runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// Signed 64-bit integer.
    Number(i64),
    /// An error travelling as data.
    Error(EvalError),
    /// A name, resolved against the environment when evaluated.
    Symbol(String),
    /// Text.
    Str(String),
    /// A builtin or a user closure.
    Function(Function),
    /// Evaluable expression; reduces when evaluated.
    SExpr(Vec<Value>),
    /// Inert list; never evaluated implicitly.
    QExpr(Vec<Value>),
}

/// Discriminant of a [`Value`], used in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Error,
    Symbol,
    Str,
    Function,
    SExpr,
    QExpr,
}

impl ValueKind {
    /// Name shown to users.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "Number",
            ValueKind::Error => "Error",
            ValueKind::Symbol => "Symbol",
            ValueKind::Str => "String",
            ValueKind::Function => "Function",
            ValueKind::SExpr => "S-Expression",
            ValueKind::QExpr => "Q-Expression",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A callable value.
#[derive(Clone, Debug)]
pub enum Function {
    Builtin(Builtin),
    Closure(Closure),
}

/// A user-defined function: formals, body and the frame that holds the
/// arguments bound so far.
///
/// The frame has no parent. A saturated call links the bound arguments to
/// the caller's environment for the duration of that call only.
#[derive(Clone, Debug)]
pub struct Closure {
    pub(crate) formals: Vec<String>,
    pub(crate) body: Vec<Value>,
    pub(crate) frame: Scope,
}

impl Closure {
    /// A closure with an empty frame.
    pub fn new(formals: Vec<String>, body: Vec<Value>) -> Self {
        Closure {
            formals,
            body,
            frame: Scope::new(),
        }
    }

    /// Formals not yet bound.
    pub fn formals(&self) -> &[String] {
        &self.formals
    }

    /// Body contents, evaluated as an S-expression when the call saturates.
    pub fn body(&self) -> &[Value] {
        &self.body
    }

    /// Arguments bound by earlier partial applications.
    pub fn frame(&self) -> &Scope {
        &self.frame
    }
}

impl Value {
    /// `()`, the result of operations run for their effect.
    pub fn empty_sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// `{}`
    pub fn empty_qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Value::Str(text.into())
    }

    pub fn builtin(builtin: Builtin) -> Self {
        Value::Function(Function::Builtin(builtin))
    }

    pub fn closure(closure: Closure) -> Self {
        Value::Function(Function::Closure(closure))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Error(_) => ValueKind::Error,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Str(_) => ValueKind::Str,
            Value::Function(_) => ValueKind::Function,
            Value::SExpr(_) => ValueKind::SExpr,
            Value::QExpr(_) => ValueKind::QExpr,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// The error, if this value is one.
    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Number(i64::from(b))
    }
}

/// Structural equality.
///
/// Builtins compare by identity; closures by formals and body, ignoring
/// whatever their frames hold. Errors compare by message.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) | (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::SExpr(a), Value::SExpr(b)) | (Value::QExpr(a), Value::QExpr(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Function::Builtin(a), Function::Builtin(b)) => a == b,
            (Function::Closure(a), Function::Closure(b)) => {
                a.formals == b.formals && a.body == b.body
            }
            _ => false,
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: char, items: &[Value], close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(err) => write!(f, "Error : {err}"),
            Value::Symbol(name) => f.write_str(name),
            Value::Str(text) => write!(f, "\"{}\"", lispy_parse::escape(text)),
            Value::Function(func) => write!(f, "{func}"),
            Value::SExpr(items) => write_seq(f, '(', items, ')'),
            Value::QExpr(items) => write_seq(f, '{', items, '}'),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin(_) => f.write_str("<builtin>"),
            Function::Closure(closure) => {
                f.write_str("(\\ {")?;
                for (i, formal) in closure.formals.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    f.write_str(formal)?;
                }
                f.write_str("} ")?;
                write_seq(f, '{', &closure.body, '}')?;
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests;
