//! Syntax lookup interface
//!
//! Answers "which call encloses this position" questions over a parsed
//! source file.

use std::ops::Range;

use crate::types::SourcePosition;

/// The source text of a string literal argument, quotes included.
///
/// Adjacent literals (`'a' 'b'`) form one argument and are kept as separate
/// parts in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLiteral {
    pub parts: Vec<String>,
}

impl RawLiteral {
    pub fn new(parts: Vec<String>) -> Self {
        Self { parts }
    }

    pub fn single(text: impl Into<String>) -> Self {
        Self {
            parts: vec![text.into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentKind {
    StringLiteral(RawLiteral),
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Label of a named argument (`skip: true`), `None` for positional ones
    pub name: Option<String>,
    pub kind: ArgumentKind,
    pub span: Range<usize>,
}

impl Argument {
    pub fn is_positional(&self) -> bool {
        self.name.is_none()
    }
}

/// A call expression `callee(arguments)` in a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub callee: String,
    /// From the start of the callee to just past the closing parenthesis
    pub span: Range<usize>,
    pub arguments: Vec<Argument>,
}

impl CallSite {
    pub fn contains(&self, offset: usize) -> bool {
        self.span.contains(&offset)
    }

    pub fn positional_argument(&self, index: usize) -> Option<&Argument> {
        self.arguments
            .iter()
            .filter(|arg| arg.is_positional())
            .nth(index)
    }
}

/// Trait for syntax queries around a source position
pub trait SyntaxLookup: Send + Sync {
    /// Find the innermost call to `callee` whose span contains the position.
    /// The callee must match exactly and unqualified.
    fn find_enclosing_call(&self, position: &SourcePosition, callee: &str) -> Option<CallSite>;

    /// The first positional argument, if it is a plain string literal
    fn first_string_argument(&self, call: &CallSite) -> Option<RawLiteral> {
        match &call.positional_argument(0)?.kind {
            ArgumentKind::StringLiteral(literal) => Some(literal.clone()),
            ArgumentKind::Other => None,
        }
    }

    /// Strip quotes and resolve escape sequences
    fn unquote(&self, literal: &RawLiteral) -> String;
}
