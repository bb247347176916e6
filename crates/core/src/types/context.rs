use std::path::{Path, PathBuf};

use super::position::SourcePosition;

/// What the caller asked to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionContext {
    /// A directory selected in the project tree
    Directory { project: PathBuf, path: PathBuf },
    /// A position inside a source file
    Source {
        project: PathBuf,
        position: SourcePosition,
        /// File that would actually run, when it differs from the file
        /// holding the position
        entry_file: Option<PathBuf>,
    },
}

impl ExecutionContext {
    pub fn directory(project: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        ExecutionContext::Directory {
            project: project.into(),
            path: path.into(),
        }
    }

    pub fn source(project: impl Into<PathBuf>, position: SourcePosition) -> Self {
        ExecutionContext::Source {
            project: project.into(),
            position,
            entry_file: None,
        }
    }

    pub fn with_entry_file(self, entry: impl Into<PathBuf>) -> Self {
        match self {
            ExecutionContext::Source {
                project, position, ..
            } => ExecutionContext::Source {
                project,
                position,
                entry_file: Some(entry.into()),
            },
            dir => dir,
        }
    }

    pub fn position(&self) -> Option<&SourcePosition> {
        match self {
            ExecutionContext::Source { position, .. } => Some(position),
            ExecutionContext::Directory { .. } => None,
        }
    }

    /// The file holding the position, or the selected directory
    pub fn location(&self) -> &Path {
        match self {
            ExecutionContext::Directory { path, .. } => path,
            ExecutionContext::Source { position, .. } => position.file(),
        }
    }
}
