//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::builtins::register_builtins;
use crate::environment::Environment;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`].
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `env` as the global environment.
    ///
    /// Builtins are registered into it on `build`, replacing any bindings
    /// that share their names.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` and `load` write. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let global = self.env.unwrap_or_default();
        register_builtins(&global);
        Interpreter {
            global,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
