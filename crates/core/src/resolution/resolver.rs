use crate::{
    interfaces::{ProjectModel, SyntaxLookup},
    types::{ExecutionContext, RunDescriptor, TestScope},
};

use super::{ScopeValidator, TestNameExtractor};

/// Classifies an execution context into a test scope
pub struct ScopeResolver<'a> {
    extractor: TestNameExtractor<'a>,
    validator: ScopeValidator<'a>,
}

impl<'a> ScopeResolver<'a> {
    pub fn new(syntax: &'a dyn SyntaxLookup, project: &'a dyn ProjectModel) -> Self {
        Self {
            extractor: TestNameExtractor::new(syntax),
            validator: ScopeValidator::new(project),
        }
    }

    /// Resolve the most specific scope the context denotes.
    ///
    /// A test name always wins over the whole file. When a name is found
    /// but the file is ineligible, resolution fails instead of widening to
    /// file scope.
    pub fn resolve(&self, context: &ExecutionContext) -> Option<TestScope> {
        match context {
            ExecutionContext::Directory { project, path } => self
                .validator
                .validate_directory(project, path)
                .then(|| TestScope::for_dir(path)),
            ExecutionContext::Source { position, .. } => {
                match self.extractor.find_test_name(position) {
                    Some(test_name) => {
                        let file_path = self.validator.validate_file(context)?;
                        Some(TestScope::for_test_name(test_name, file_path))
                    }
                    None => {
                        let file_path = self.validator.validate_file(context)?;
                        Some(TestScope::for_file(file_path))
                    }
                }
            }
        }
    }

    pub fn resolve_descriptor(&self, context: &ExecutionContext) -> Option<RunDescriptor> {
        let scope = self.resolve(context)?;
        tracing::debug!("Resolved {:?} scope for {:?}", scope.kind(), context.location());
        Some(RunDescriptor::new(scope))
    }

    /// Point an existing descriptor at the context. The descriptor is left
    /// untouched when the context does not denote a test.
    pub fn setup(&self, descriptor: &mut RunDescriptor, context: &ExecutionContext) -> bool {
        match self.resolve(context) {
            Some(scope) => {
                descriptor.set_scope(scope);
                true
            }
            None => false,
        }
    }
}
