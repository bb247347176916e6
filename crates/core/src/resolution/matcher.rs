use crate::{
    interfaces::{ProjectModel, SyntaxLookup},
    types::{ExecutionContext, RunDescriptor, TestScope},
};

use super::TestNameExtractor;

/// Decides whether an existing descriptor already stands for a context
pub struct ConfigurationMatcher<'a> {
    extractor: TestNameExtractor<'a>,
    project: &'a dyn ProjectModel,
}

impl<'a> ConfigurationMatcher<'a> {
    pub fn new(syntax: &'a dyn SyntaxLookup, project: &'a dyn ProjectModel) -> Self {
        Self {
            extractor: TestNameExtractor::new(syntax),
            project,
        }
    }

    /// Matching is exact on the scope shape: a file descriptor never stands
    /// for a position inside a named test, and a name descriptor never
    /// stands for a position outside one.
    pub fn matches(&self, existing: &RunDescriptor, context: &ExecutionContext) -> bool {
        let scope = existing.scope();
        let Some(stored_path) = scope.path() else {
            return false;
        };

        let position = match context {
            ExecutionContext::Directory { path, .. } => {
                return matches!(scope, TestScope::Dir { .. }) && stored_path == path.as_path();
            }
            ExecutionContext::Source { position, .. } => position,
        };

        let same_file = self
            .project
            .resolve_entry_file(context)
            .is_some_and(|entry| entry == stored_path);
        if !same_file {
            return false;
        }

        let test_name = self.extractor.find_test_name(position);
        match scope {
            TestScope::Name {
                test_name: expected,
                ..
            } => test_name.as_deref() == Some(expected.as_str()),
            TestScope::File { .. } => test_name.is_none(),
            TestScope::Dir { .. } => false,
        }
    }
}
