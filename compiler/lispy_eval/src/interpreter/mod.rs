//! Tree-walking evaluator.
//!
//! Evaluation is structural recursion over [`Value`]: symbols are looked up,
//! S-expressions are reduced, and everything else evaluates to itself.
//! Errors are ordinary values; the first one found among an S-expression's
//! evaluated elements becomes the result of the whole expression.

mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use lispy_parse::{parse, parse_file, ParseError};
use lispy_stack::ensure_sufficient_stack;

use crate::environment::Environment;
use crate::errors::{load_failed, not_a_function};
use crate::print_handler::SharedPrintHandler;
use crate::read::{read_node, read_program};
use crate::value::Value;

/// An evaluation context: the global environment plus where output goes.
pub struct Interpreter {
    /// Root frame holding the builtins and every `def`.
    global: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter printing to stdout, with every builtin registered.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// The global environment.
    pub fn env(&self) -> &Environment {
        &self.global
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate `value` in the global environment.
    pub fn eval(&self, value: Value) -> Value {
        self.eval_in(&self.global, value)
    }

    /// Evaluate `value` in `env`.
    pub fn eval_in(&self, env: &Environment, value: Value) -> Value {
        match value {
            Value::Symbol(name) => env.get(&name),
            Value::SExpr(items) => ensure_sufficient_stack(|| self.eval_sexpr(env, items)),
            other => other,
        }
    }

    fn eval_sexpr(&self, env: &Environment, items: Vec<Value>) -> Value {
        // Every element is evaluated before any error is looked for.
        let mut items: Vec<Value> = items
            .into_iter()
            .map(|item| self.eval_in(env, item))
            .collect();

        if let Some(index) = items.iter().position(Value::is_error) {
            return items.swap_remove(index);
        }

        let mut items = items.into_iter();
        let Some(first) = items.next() else {
            return Value::empty_sexpr();
        };
        let args: Vec<Value> = items.collect();
        if args.is_empty() {
            return self.eval_in(env, first);
        }

        match first {
            Value::Function(func) => self.call(env, func, args),
            other => Value::Error(not_a_function(other.kind())),
        }
    }

    /// Parse `text`, map it to an S-expression of its top-level expressions
    /// and evaluate that in the global environment.
    pub fn eval_source(&self, source_name: &str, text: &str) -> Result<Value, ParseError> {
        let program = parse(source_name, text)?;
        Ok(self.eval(read_program(&program)))
    }

    /// Run the `load` builtin on `path` in the global environment.
    pub fn load(&self, path: &str) -> Value {
        self.load_in(&self.global, path)
    }

    /// Evaluate each top-level expression of the file at `path` in order.
    ///
    /// Each expression is echoed after it runs, followed by its result if
    /// that result is an error. A file that cannot be read or parsed yields
    /// `Could not load Library ...` and nothing is evaluated.
    #[tracing::instrument(level = "debug", skip(self, env))]
    pub(crate) fn load_in(&self, env: &Environment, path: &str) -> Value {
        let program = match parse_file(path) {
            Ok(program) => program,
            Err(err) => {
                tracing::debug!(%err, "load failed");
                return Value::Error(load_failed(err));
            }
        };

        for node in program.expressions() {
            let Some(expr) = read_node(node) else {
                continue;
            };
            let result = self.eval_in(env, expr.clone());
            self.print_handler.println(&expr.to_string());
            if result.is_error() {
                self.print_handler.println(&result.to_string());
            }
        }
        Value::empty_sexpr()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
