//! Syntax tree to runtime values.
//!
//! A one-to-one structural mapping; the only work done here is number range
//! checking, unescaping strings and dropping comments.

use lispy_parse::{unescape, Program, SyntaxNode};
use lispy_stack::ensure_sufficient_stack;

use crate::errors::invalid_number;
use crate::value::Value;

/// A whole program as one S-expression of its top-level expressions.
pub fn read_program(program: &Program) -> Value {
    Value::SExpr(program.expressions().filter_map(read_node).collect())
}

/// Map one node. Comments have no value and map to `None`.
pub fn read_node(node: &SyntaxNode) -> Option<Value> {
    let value = match node {
        SyntaxNode::Comment(_) => return None,
        SyntaxNode::Number(text) => read_number(text),
        SyntaxNode::Symbol(name) => Value::Symbol(name.clone()),
        SyntaxNode::Str(escaped) => Value::Str(unescape(escaped)),
        SyntaxNode::SExpr(children) => Value::SExpr(read_children(children)),
        SyntaxNode::QExpr(children) => Value::QExpr(read_children(children)),
    };
    Some(value)
}

fn read_children(children: &[SyntaxNode]) -> Vec<Value> {
    ensure_sufficient_stack(|| children.iter().filter_map(read_node).collect())
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Error(invalid_number()),
    }
}
