//! Producer that turns execution contexts into Flutter test descriptors

use crate::{
    command::TestCommand,
    config::Config,
    interfaces::{ProjectModel, SyntaxLookup},
    resolution::{ConfigurationMatcher, ScopeResolver},
    services::{DartSyntax, PubProjectModel},
    types::{ConfigurationKind, ExecutionContext, RunDescriptor, TestScope},
};
use tracing::debug;

pub struct TestConfigProducer {
    syntax: Box<dyn SyntaxLookup>,
    project: Box<dyn ProjectModel>,
    config: Config,
}

impl TestConfigProducer {
    /// Producer backed by the Dart scanner and `pubspec.yaml` files on disk
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            syntax: Box::new(DartSyntax::new()),
            project: Box::new(PubProjectModel::with_config(config.clone())),
            config,
        }
    }

    pub fn with_collaborators(
        syntax: Box<dyn SyntaxLookup>,
        project: Box<dyn ProjectModel>,
        config: Config,
    ) -> Self {
        Self {
            syntax,
            project,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn kind(&self) -> ConfigurationKind {
        ConfigurationKind::FlutterTest
    }

    pub fn resolver(&self) -> ScopeResolver<'_> {
        ScopeResolver::new(self.syntax.as_ref(), self.project.as_ref())
    }

    pub fn matcher(&self) -> ConfigurationMatcher<'_> {
        ConfigurationMatcher::new(self.syntax.as_ref(), self.project.as_ref())
    }

    /// Build a fresh descriptor for the context, if it denotes a test
    pub fn setup_from_context(&self, context: &ExecutionContext) -> Option<RunDescriptor> {
        self.resolver().resolve_descriptor(context)
    }

    /// Whether `existing` was already created for this context
    pub fn is_configuration_from_context(
        &self,
        existing: &RunDescriptor,
        context: &ExecutionContext,
    ) -> bool {
        self.matcher().matches(existing, context)
    }

    pub fn find_existing<'d>(
        &self,
        existing: &'d [RunDescriptor],
        context: &ExecutionContext,
    ) -> Option<&'d RunDescriptor> {
        let matcher = self.matcher();
        existing.iter().find(|d| matcher.matches(d, context))
    }

    /// Reuse a matching descriptor, or create one when none matches
    pub fn find_or_create(
        &self,
        existing: &[RunDescriptor],
        context: &ExecutionContext,
    ) -> Option<RunDescriptor> {
        if let Some(found) = self.find_existing(existing, context) {
            debug!("Reusing descriptor '{}'", found.name());
            return Some(found.clone());
        }
        self.setup_from_context(context)
    }

    /// A descriptor from this producer takes precedence over a plain Dart
    /// test configuration for the same context, and only over that.
    pub fn should_replace(&self, other: &ConfigurationKind) -> bool {
        other.is_dart_test()
    }

    /// The command that would run `descriptor`, from its package root
    pub fn command_for(&self, descriptor: &RunDescriptor) -> TestCommand {
        let command = TestCommand::for_descriptor(descriptor, &self.config);
        let root = match descriptor.scope() {
            TestScope::Name { file_path, .. } | TestScope::File { file_path } => {
                self.project.root_for_file(file_path)
            }
            TestScope::Dir { dir_path } => self.project.root_for_directory_subtree(dir_path),
        };
        match root {
            Some(root) => command.with_working_dir(root.path()),
            None => command,
        }
    }
}

impl Default for TestConfigProducer {
    fn default() -> Self {
        Self::new()
    }
}
