//! Scanner-backed implementation of SyntaxLookup

use std::borrow::Cow;

use crate::{
    interfaces::{CallSite, RawLiteral, SyntaxLookup},
    parser,
    types::SourcePosition,
};

/// Dart implementation of [`SyntaxLookup`]
#[derive(Debug, Default, Clone, Copy)]
pub struct DartSyntax;

impl DartSyntax {
    pub fn new() -> Self {
        Self
    }

    /// Every call to `callee` in the source, outermost first
    pub fn calls_named(&self, source: &str, callee: &str) -> Vec<CallSite> {
        parser::find_calls(source)
            .into_iter()
            .filter(|call| call.callee == callee)
            .collect()
    }

    fn source_text<'p>(&self, position: &'p SourcePosition) -> Option<Cow<'p, str>> {
        if let Some(text) = &position.text {
            return Some(Cow::Borrowed(&**text));
        }
        match std::fs::read_to_string(position.file()) {
            Ok(text) => Some(Cow::Owned(text)),
            Err(e) => {
                tracing::debug!("Cannot read {:?}: {}", position.file(), e);
                None
            }
        }
    }
}

impl SyntaxLookup for DartSyntax {
    fn find_enclosing_call(&self, position: &SourcePosition, callee: &str) -> Option<CallSite> {
        let source = self.source_text(position)?;
        let calls = parser::find_calls(&source);
        parser::enclosing_call(&calls, position.offset, callee).cloned()
    }

    fn unquote(&self, literal: &RawLiteral) -> String {
        parser::unquote(&literal.parts)
    }
}
