//! Project model interface
//!
//! Provides package-root discovery, module classification and entry-file
//! resolution. Implementations must answer from fresh state on every call.

use std::path::{Component, Path, PathBuf};

use crate::types::ExecutionContext;

/// A package boundary directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectRoot {
    path: PathBuf,
}

impl ProjectRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `/`-separated path of `descendant` below this root, or `None`
    /// when it is not a descendant. The root itself maps to an empty string.
    pub fn relative_path(&self, descendant: &Path) -> Option<String> {
        let rest = descendant.strip_prefix(&self.path).ok()?;
        let mut parts = Vec::new();
        for component in rest.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_str()?.to_string()),
                _ => return None,
            }
        }
        Some(parts.join("/"))
    }
}

/// Trait for project and package queries
pub trait ProjectModel: Send + Sync {
    /// Nearest package root at or above the file's directory
    fn root_for_file(&self, file: &Path) -> Option<ProjectRoot>;

    /// Package root for a directory, searching the directory itself, its
    /// ancestors and its own subtree
    fn root_for_directory_subtree(&self, dir: &Path) -> Option<ProjectRoot>;

    fn relative_path(&self, root: &ProjectRoot, path: &Path) -> Option<String> {
        root.relative_path(path)
    }

    /// Whether the directory subtree holds at least one test file of `root`
    fn contains_tests(&self, root: &ProjectRoot, dir: &Path) -> bool;

    /// Whether the module owning the context is of the supported framework
    fn is_supported_module(&self, context: &ExecutionContext) -> bool;

    /// Whether any module anywhere in the project is of the supported framework
    fn project_has_supported_module(&self, project: &Path) -> bool;

    /// The concrete file the context would execute
    fn resolve_entry_file(&self, context: &ExecutionContext) -> Option<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_of_descendant() {
        let root = ProjectRoot::new("/p");
        assert_eq!(
            root.relative_path(Path::new("/p/test/a_test.dart")).as_deref(),
            Some("test/a_test.dart")
        );
        assert_eq!(root.relative_path(Path::new("/p")).as_deref(), Some(""));
    }

    #[test]
    fn test_relative_path_outside_root() {
        let root = ProjectRoot::new("/p");
        assert_eq!(root.relative_path(Path::new("/q/test/a_test.dart")), None);
        assert_eq!(root.relative_path(Path::new("/p/../q/a_test.dart")), None);
        // Prefix matching is per component, not per character
        assert_eq!(root.relative_path(Path::new("/pp/test/a_test.dart")), None);
    }
}
