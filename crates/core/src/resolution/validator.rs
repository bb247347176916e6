use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{interfaces::ProjectModel, types::ExecutionContext};

use super::TEST_DIR_PREFIX;

/// Confirms that a file or directory lies in a supported project's test area
pub struct ScopeValidator<'a> {
    project: &'a dyn ProjectModel,
}

impl<'a> ScopeValidator<'a> {
    pub fn new(project: &'a dyn ProjectModel) -> Self {
        Self { project }
    }

    /// Validate the file a source context would run.
    ///
    /// Each check is a hard gate; the first failure rejects the context.
    /// On success returns the absolute path of the resolved entry file,
    /// which may differ from the file holding the position.
    pub fn validate_file(&self, context: &ExecutionContext) -> Option<PathBuf> {
        let ExecutionContext::Source { position, .. } = context else {
            return None;
        };

        let Some(root) = self.project.root_for_file(position.file()) else {
            debug!("No package root above {:?}", position.file());
            return None;
        };

        if !self.project.is_supported_module(context) {
            debug!("Module of {:?} is not a supported framework module", position.file());
            return None;
        }

        let Some(entry) = self.project.resolve_entry_file(context) else {
            debug!("No entry file for {:?}", position.file());
            return None;
        };

        let Some(relative) = self.project.relative_path(&root, &entry) else {
            debug!("Entry file {:?} is outside root {:?}", entry, root.path());
            return None;
        };

        if !relative.starts_with(TEST_DIR_PREFIX) {
            debug!("Entry file {:?} is not under {}", relative, TEST_DIR_PREFIX);
            return None;
        }

        Some(entry)
    }

    /// Validate a directory selected inside `project`.
    ///
    /// Unlike files, the package root may be found inside the directory,
    /// and the framework check covers the whole project rather than one
    /// module.
    pub fn validate_directory(&self, project: &Path, dir: &Path) -> bool {
        let Some(root) = self.project.root_for_directory_subtree(dir) else {
            debug!("No package root for directory {:?}", dir);
            return false;
        };

        if !self.project.project_has_supported_module(project) {
            debug!("Project {:?} has no supported framework module", project);
            return false;
        }

        if !self.project.contains_tests(&root, dir) {
            debug!("Directory {:?} holds no tests of {:?}", dir, root.path());
            return false;
        }

        true
    }
}
