use crate::{interfaces::SyntaxLookup, types::SourcePosition};

use super::TEST_IDENTIFIER;

/// Finds the name of the test declaration enclosing a position
pub struct TestNameExtractor<'a> {
    syntax: &'a dyn SyntaxLookup,
}

impl<'a> TestNameExtractor<'a> {
    pub fn new(syntax: &'a dyn SyntaxLookup) -> Self {
        Self { syntax }
    }

    /// The unquoted name of the nearest enclosing `test(...)` call.
    ///
    /// Returns `None` when there is no such call, or when its first
    /// positional argument is anything other than a plain string literal.
    pub fn find_test_name(&self, position: &SourcePosition) -> Option<String> {
        let call = self.syntax.find_enclosing_call(position, TEST_IDENTIFIER)?;
        if call.callee != TEST_IDENTIFIER {
            return None;
        }

        let Some(literal) = self.syntax.first_string_argument(&call) else {
            tracing::debug!(
                "Call at {:?} in {:?} has no string literal name",
                call.span,
                position.file()
            );
            return None;
        };

        let name = self.syntax.unquote(&literal);
        if name.is_empty() { None } else { Some(name) }
    }
}
