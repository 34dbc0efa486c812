//! Function application.

use std::collections::VecDeque;

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{invalid_variadic, too_many_arguments};
use crate::value::{Closure, Function, Value, VARIADIC_MARKER};

impl Interpreter {
    /// Apply `func` to evaluated `args` on behalf of the caller's `env`.
    pub(crate) fn call(&self, env: &Environment, func: Function, args: Vec<Value>) -> Value {
        match func {
            Function::Builtin(builtin) => {
                tracing::trace!(name = builtin.name(), args = args.len(), "builtin call");
                builtin.call(self, env, args)
            }
            Function::Closure(closure) => self.call_closure(env, closure, args),
        }
    }

    /// Bind `args` to the closure's formals in order.
    ///
    /// Formals left unbound make the result a partially applied closure that
    /// remembers what was bound. Once every formal is bound, the body runs
    /// in a fresh frame holding the bindings whose parent is the caller's
    /// environment. `closure` is owned, so nothing shared is ever mutated.
    fn call_closure(&self, env: &Environment, mut closure: Closure, args: Vec<Value>) -> Value {
        let given = args.len();
        let total = closure.formals.len();
        let mut formals = VecDeque::from(std::mem::take(&mut closure.formals));
        let mut args = VecDeque::from(args);

        while !args.is_empty() {
            let Some(formal) = formals.pop_front() else {
                return Value::Error(too_many_arguments(given, total));
            };

            if formal == VARIADIC_MARKER {
                if formals.len() != 1 {
                    return Value::Error(invalid_variadic());
                }
                if let Some(rest) = formals.pop_front() {
                    closure.frame.put(rest, Value::QExpr(args.drain(..).collect()));
                }
                break;
            }

            if let Some(arg) = args.pop_front() {
                closure.frame.put(formal, arg);
            }
        }

        // Nothing left for the variadic formal: it binds to `{}`.
        if formals.front().is_some_and(|formal| formal == VARIADIC_MARKER) {
            if formals.len() != 2 {
                return Value::Error(invalid_variadic());
            }
            formals.pop_front();
            if let Some(rest) = formals.pop_front() {
                closure.frame.put(rest, Value::empty_qexpr());
            }
        }

        if !formals.is_empty() {
            tracing::trace!(given, remaining = formals.len(), "partial application");
            closure.formals = Vec::from(formals);
            return Value::closure(closure);
        }

        tracing::trace!(given, "closure call");
        let call_env = Environment::with_parent(closure.frame, env);
        self.eval_in(&call_env, Value::SExpr(closure.body))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
