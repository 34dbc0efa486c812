//! Lispy Parse - the Reader for the Lispy language.
//!
//! Turns source text into a [`Program`]: a list of [`SyntaxNode`] trees with
//! number, symbol, string and comment leaves and S-/Q-expression interiors.
//! Delimiters are consumed, not retained. Strings keep their escaped source
//! text; [`unescape`] resolves it and [`escape`] reverses it for printing.
//!
//! The evaluator maps the tree onto runtime values; nothing here knows
//! about evaluation.
//!
//! # Grammar
//!
//! ```text
//! number  : '-'? [0-9]+
//! string  : '"' ( '\' any | [^"] )* '"'
//! comment : ';' [^\r\n]*
//! symbol  : [a-zA-Z0-9_+\-*/\\=<>!&%]+
//! sexpr   : '(' expr* ')'
//! qexpr   : '{' expr* '}'
//! expr    : number | symbol | string | comment | sexpr | qexpr
//! program : expr*
//! ```

mod cursor;
mod escape;
mod parse_error;
mod parser;
mod syntax;

pub use escape::{escape, unescape};
pub use parse_error::{ParseError, ParseErrorKind};
pub use parser::{parse, parse_file};
pub use syntax::{Program, SyntaxNode};
