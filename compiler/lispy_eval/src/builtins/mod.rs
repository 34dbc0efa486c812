//! The builtin library.
//!
//! Each builtin is an enum variant; dispatch is a `match`. Builtins receive
//! the caller's environment and their already-evaluated operands and return
//! exactly one value. Precondition failures come back as error values
//! before anything is bound or printed.

mod binding;
mod control;
mod helpers;
mod lists;
mod numeric;

use crate::environment::Environment;
use crate::errors::EvalError;
use crate::interpreter::Interpreter;
use crate::value::Value;

/// Identity of a native operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    // Binding
    Lambda,
    Def,
    Put,
    // Lists
    List,
    Head,
    Tail,
    Eval,
    Join,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Conditionals and comparison
    If,
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    // Strings and I/O
    Load,
    Error,
    Print,
}

impl Builtin {
    /// Every builtin, in registration order.
    pub const ALL: [Builtin; 23] = [
        Builtin::Lambda,
        Builtin::Def,
        Builtin::Put,
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Mod,
        Builtin::If,
        Builtin::Eq,
        Builtin::Ne,
        Builtin::Gt,
        Builtin::Lt,
        Builtin::Ge,
        Builtin::Le,
        Builtin::Load,
        Builtin::Error,
        Builtin::Print,
    ];

    /// The symbol this builtin is bound to.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Lambda => "\\",
            Builtin::Def => "def",
            Builtin::Put => "=",
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Mod => "%",
            Builtin::If => "if",
            Builtin::Eq => "==",
            Builtin::Ne => "!=",
            Builtin::Gt => ">",
            Builtin::Lt => "<",
            Builtin::Ge => ">=",
            Builtin::Le => "<=",
            Builtin::Load => "load",
            Builtin::Error => "error",
            Builtin::Print => "print",
        }
    }

    /// Apply this builtin to evaluated operands.
    pub fn call(self, interp: &Interpreter, env: &Environment, args: Vec<Value>) -> Value {
        self.dispatch(interp, env, args)
            .unwrap_or_else(Value::Error)
    }

    fn dispatch(
        self,
        interp: &Interpreter,
        env: &Environment,
        args: Vec<Value>,
    ) -> Result<Value, EvalError> {
        match self {
            Builtin::Lambda => binding::lambda(args),
            Builtin::Def => binding::define(env, args),
            Builtin::Put => binding::put(env, args),

            Builtin::List => Ok(lists::list(args)),
            Builtin::Head => lists::head(args),
            Builtin::Tail => lists::tail(args),
            Builtin::Eval => lists::eval(interp, env, args),
            Builtin::Join => lists::join(args),

            Builtin::Add | Builtin::Sub | Builtin::Mul | Builtin::Div | Builtin::Mod => {
                numeric::arithmetic(self, &args)
            }
            Builtin::Gt | Builtin::Lt | Builtin::Ge | Builtin::Le => numeric::ordering(self, &args),
            Builtin::Eq | Builtin::Ne => numeric::equality(self, &args),

            Builtin::If => control::if_(interp, env, args),
            Builtin::Load => control::load(interp, env, args),
            Builtin::Error => control::error(args),
            Builtin::Print => Ok(control::print(interp, &args)),
        }
    }
}

/// Bind every builtin under its name in `env`.
pub fn register_builtins(env: &Environment) {
    for builtin in Builtin::ALL {
        env.put(builtin.name(), Value::builtin(builtin));
    }
}
