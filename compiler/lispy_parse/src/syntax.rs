//! Syntax tree produced by the parser.

use std::fmt;

/// One node of the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Decimal digits with an optional leading `-`, not yet range-checked.
    Number(String),
    /// Raw symbol text.
    Symbol(String),
    /// String contents between the quotes, escapes still in place.
    Str(String),
    /// Comment text after the `;`.
    Comment(String),
    /// `( ... )`
    SExpr(Vec<SyntaxNode>),
    /// `{ ... }`
    QExpr(Vec<SyntaxNode>),
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_seq(
            f: &mut fmt::Formatter<'_>,
            open: char,
            items: &[SyntaxNode],
            close: char,
        ) -> fmt::Result {
            write!(f, "{open}")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{item}")?;
            }
            write!(f, "{close}")
        }

        match self {
            SyntaxNode::Number(text) | SyntaxNode::Symbol(text) => write!(f, "{text}"),
            SyntaxNode::Str(text) => write!(f, "\"{text}\""),
            SyntaxNode::Comment(text) => write!(f, ";{text}"),
            SyntaxNode::SExpr(items) => write_seq(f, '(', items, ')'),
            SyntaxNode::QExpr(items) => write_seq(f, '{', items, '}'),
        }
    }
}

/// A parsed source: its top-level expressions in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    /// Name used in diagnostics (`<stdin>` or a file path).
    pub source_name: String,
    /// Top-level nodes, comments included.
    pub children: Vec<SyntaxNode>,
}

impl Program {
    /// Top-level nodes that are not comments.
    pub fn expressions(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children
            .iter()
            .filter(|node| !matches!(node, SyntaxNode::Comment(_)))
    }
}
