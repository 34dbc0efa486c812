//! Evaluation errors.
//!
//! Errors are values: builtins and the evaluator return them inside
//! [`Value::Error`](crate::Value::Error) and the evaluator propagates them
//! like any other result. `EvalErrorKind` gives each failure a structured
//! category; its `Display` produces the message users see, and that message
//! is all that equality and printing look at.
//!
//! Build errors through the factory functions below rather than by hand.

use std::fmt;

use crate::value::ValueKind;

/// Structured category of an evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lookup
    UnboundSymbol {
        name: String,
    },

    // Arithmetic
    DivisionByZero,
    IntegerOverflow,
    InvalidNumber,

    // Application
    NotAFunction {
        got: ValueKind,
    },
    TooManyArguments {
        given: usize,
        expected: usize,
    },
    InvalidVariadic,

    // Builtin preconditions
    WrongArgCount {
        function: &'static str,
        got: usize,
        expected: usize,
    },
    WrongArgType {
        function: &'static str,
        index: usize,
        got: ValueKind,
        expected: ValueKind,
    },
    EmptyArgument {
        function: &'static str,
        index: usize,
    },
    LambdaNonSymbol {
        got: ValueKind,
    },
    DefineNonSymbol {
        function: &'static str,
        got: ValueKind,
    },
    DefineArityMismatch {
        function: &'static str,
        symbols: usize,
        values: usize,
    },

    // Loading
    LoadFailed {
        diagnostic: String,
    },

    /// Raised by the program itself through `error`.
    User {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundSymbol { name } => write!(f, "Unbound symbol '{name}'"),

            Self::DivisionByZero => write!(f, "Division By Zero."),
            Self::IntegerOverflow => write!(f, "Integer Overflow."),
            Self::InvalidNumber => write!(f, "Invalid Number."),

            Self::NotAFunction { got } => write!(
                f,
                "S-Expression starts with incorrect type. Got {got}, Expected {}.",
                ValueKind::Function
            ),
            Self::TooManyArguments { given, expected } => write!(
                f,
                "Function passed too many arguments. Got {given}, Expected {expected}."
            ),
            Self::InvalidVariadic => write!(
                f,
                "Function format invalid. Symbol '&' not followed by single symbol."
            ),

            Self::WrongArgCount {
                function,
                got,
                expected,
            } => write!(
                f,
                "Function '{function}' passed incorrect number of arguments. Got {got}, Expected {expected}."
            ),
            Self::WrongArgType {
                function,
                index,
                got,
                expected,
            } => write!(
                f,
                "Function '{function}' passed incorrect type for argument {index}. Got {got}, Expected {expected}."
            ),
            Self::EmptyArgument { function, index } => {
                write!(f, "Function '{function}' passed {{}} for argument {index}.")
            }
            Self::LambdaNonSymbol { got } => write!(
                f,
                "Cannot define non-symbol. Got {got}, Expected {}.",
                ValueKind::Symbol
            ),
            Self::DefineNonSymbol { function, got } => write!(
                f,
                "Function '{function}' cannot define non-symbol. Got {got}, Expected {}.",
                ValueKind::Symbol
            ),
            Self::DefineArityMismatch {
                function,
                symbols,
                values,
            } => write!(
                f,
                "Function '{function}' passed too many arguments for symbols. Got {symbols}, Expected {values}."
            ),

            Self::LoadFailed { diagnostic } => write!(f, "Could not load Library {diagnostic}"),

            Self::User { message } => write!(f, "{message}"),
        }
    }
}

/// An evaluation error: its category and the rendered message.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equal to `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// A user-raised error carrying `message` verbatim.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::User {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

/// Errors are opaque strings to the language: two errors are equal when
/// their messages are.
impl PartialEq for EvalError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for EvalError {}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Lookup

pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    })
}

// Arithmetic

pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

pub fn integer_overflow() -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow)
}

pub fn invalid_number() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumber)
}

// Application

pub fn not_a_function(got: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction { got })
}

pub fn too_many_arguments(given: usize, expected: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooManyArguments { given, expected })
}

pub fn invalid_variadic() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidVariadic)
}

// Builtin preconditions

pub fn wrong_arg_count(function: &'static str, got: usize, expected: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgCount {
        function,
        got,
        expected,
    })
}

pub fn wrong_arg_type(
    function: &'static str,
    index: usize,
    got: ValueKind,
    expected: ValueKind,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgType {
        function,
        index,
        got,
        expected,
    })
}

pub fn empty_argument(function: &'static str, index: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyArgument { function, index })
}

pub fn lambda_non_symbol(got: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::LambdaNonSymbol { got })
}

pub fn define_non_symbol(function: &'static str, got: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DefineNonSymbol { function, got })
}

pub fn define_arity_mismatch(function: &'static str, symbols: usize, values: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DefineArityMismatch {
        function,
        symbols,
        values,
    })
}

// Loading

pub fn load_failed(diagnostic: impl fmt::Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::LoadFailed {
        diagnostic: diagnostic.to_string(),
    })
}
