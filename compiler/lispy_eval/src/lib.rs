//! Lispy Eval - the evaluator for the Lispy language.
//!
//! # Architecture
//!
//! - [`Value`]: the tagged union of runtime values. S-expressions reduce
//!   when evaluated, Q-expressions are inert data.
//! - [`Environment`]: chained scope frames. Lookup walks outward, `put` binds
//!   in the nearest frame, `define_global` binds in the root.
//! - [`Interpreter`]: structural reduction of values plus the closure
//!   application protocol (currying, `&` variadics).
//! - [`Builtin`]: the primitive operations, dispatched by enum.
//!
//! Failures never unwind. Every error is a [`Value::Error`] that the
//! evaluator propagates as data.

pub mod errors;
mod builtins;
mod environment;
mod interpreter;
mod print_handler;
mod read;
mod value;

pub use builtins::Builtin;
pub use environment::{Environment, Scope};
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use read::{read_node, read_program};
pub use value::{Closure, Function, Value, ValueKind, VARIADIC_MARKER};
