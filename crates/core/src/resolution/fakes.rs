//! Deterministic in-memory collaborators for unit tests

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    interfaces::{CallSite, ProjectModel, ProjectRoot, RawLiteral, SyntaxLookup},
    types::{ExecutionContext, SourcePosition},
};

#[derive(Default)]
pub struct FakeSyntax {
    calls: Vec<(PathBuf, CallSite)>,
}

impl FakeSyntax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_call(mut self, file: impl Into<PathBuf>, call: CallSite) -> Self {
        self.calls.push((file.into(), call));
        self
    }
}

impl SyntaxLookup for FakeSyntax {
    fn find_enclosing_call(&self, position: &SourcePosition, callee: &str) -> Option<CallSite> {
        self.calls
            .iter()
            .filter(|(file, call)| {
                file == position.file() && call.callee == callee && call.contains(position.offset)
            })
            .min_by_key(|(_, call)| call.span.len())
            .map(|(_, call)| call.clone())
    }

    fn unquote(&self, literal: &RawLiteral) -> String {
        literal
            .parts
            .iter()
            .map(|part| {
                let mut chars = part.chars();
                chars.next();
                chars.next_back();
                chars.as_str().to_string()
            })
            .collect()
    }
}

#[derive(Default)]
pub struct FakeProject {
    roots: Vec<PathBuf>,
    supported_roots: HashSet<PathBuf>,
    project_supported: bool,
    test_files: Vec<PathBuf>,
    entry_files: HashMap<PathBuf, PathBuf>,
    root_lookups: AtomicUsize,
}

impl FakeProject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>, supported: bool) -> Self {
        let root = root.into();
        if supported {
            self.supported_roots.insert(root.clone());
            self.project_supported = true;
        }
        self.roots.push(root);
        self
    }

    /// Mark the project as holding a supported module somewhere outside the
    /// registered roots
    pub fn with_supported_project(mut self, supported: bool) -> Self {
        self.project_supported = supported;
        self
    }

    pub fn with_test_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.test_files.push(file.into());
        self
    }

    /// Redirect the entry file resolved for contexts positioned in `from`
    pub fn with_entry_file(mut self, from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        self.entry_files.insert(from.into(), to.into());
        self
    }

    pub fn root_lookups(&self) -> usize {
        self.root_lookups.load(Ordering::SeqCst)
    }

    fn nearest_root(&self, path: &Path) -> Option<ProjectRoot> {
        self.root_lookups.fetch_add(1, Ordering::SeqCst);
        self.roots
            .iter()
            .filter(|root| path.starts_with(root))
            .max_by_key(|root| root.components().count())
            .map(ProjectRoot::new)
    }
}

impl ProjectModel for FakeProject {
    fn root_for_file(&self, file: &Path) -> Option<ProjectRoot> {
        self.nearest_root(file.parent()?)
    }

    fn root_for_directory_subtree(&self, dir: &Path) -> Option<ProjectRoot> {
        self.nearest_root(dir).or_else(|| {
            self.roots
                .iter()
                .filter(|root| root.starts_with(dir))
                .min_by_key(|root| root.components().count())
                .map(ProjectRoot::new)
        })
    }

    fn contains_tests(&self, root: &ProjectRoot, dir: &Path) -> bool {
        self.test_files
            .iter()
            .any(|file| file.starts_with(dir) && file.starts_with(root.path()))
    }

    fn is_supported_module(&self, context: &ExecutionContext) -> bool {
        let location = context.location();
        let root = match context {
            ExecutionContext::Directory { .. } => self.nearest_root(location),
            ExecutionContext::Source { .. } => self.root_for_file(location),
        };
        root.is_some_and(|root| self.supported_roots.contains(root.path()))
    }

    fn project_has_supported_module(&self, _project: &Path) -> bool {
        self.project_supported
    }

    fn resolve_entry_file(&self, context: &ExecutionContext) -> Option<PathBuf> {
        let ExecutionContext::Source {
            position,
            entry_file,
            ..
        } = context
        else {
            return None;
        };
        if let Some(entry) = entry_file {
            return Some(entry.clone());
        }
        if let Some(entry) = self.entry_files.get(position.file()) {
            return Some(entry.clone());
        }
        position
            .file()
            .extension()
            .is_some_and(|ext| ext == "dart")
            .then(|| position.file().to_path_buf())
    }
}
