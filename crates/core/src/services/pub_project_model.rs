//! Filesystem implementation of ProjectModel for Dart pub packages
//!
//! A package root is a directory holding `pubspec.yaml`. Nothing is cached:
//! every query goes back to disk.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::pubspec::{PUBSPEC_FILE, Pubspec};
use crate::{
    config::Config,
    interfaces::{ProjectModel, ProjectRoot},
    parser,
    resolution::TEST_DIR_PREFIX,
    types::ExecutionContext,
};

pub struct PubProjectModel {
    config: Config,
}

impl PubProjectModel {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the package rooted at `root` declares the framework dependency
    pub fn is_framework_package(&self, root: &Path) -> bool {
        let manifest = root.join(PUBSPEC_FILE);
        match Pubspec::load(&manifest) {
            Ok(pubspec) => pubspec.depends_on(self.config.framework_dependency()),
            Err(e) => {
                tracing::debug!("Skipping unreadable manifest {:?}: {}", manifest, e);
                false
            }
        }
    }

    /// Entries below `dir` in a stable order, skipping ignored directories
    fn walk(&self, dir: &Path) -> impl Iterator<Item = DirEntry> {
        let config = &self.config;
        WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !config.is_ignored_dir(&entry.file_name().to_string_lossy())
            })
            .filter_map(|entry| entry.ok())
    }
}

impl Default for PubProjectModel {
    fn default() -> Self {
        Self::new()
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn nearest_root(start: &Path) -> Option<ProjectRoot> {
    start
        .ancestors()
        .find(|dir| dir.join(PUBSPEC_FILE).is_file())
        .map(ProjectRoot::new)
}

impl ProjectModel for PubProjectModel {
    fn root_for_file(&self, file: &Path) -> Option<ProjectRoot> {
        let file = absolute(file);
        nearest_root(file.parent()?)
    }

    fn root_for_directory_subtree(&self, dir: &Path) -> Option<ProjectRoot> {
        let dir = absolute(dir);
        if let Some(root) = nearest_root(&dir) {
            return Some(root);
        }

        // The directory may hold packages rather than sit inside one
        self.walk(&dir)
            .filter(|entry| entry.file_type().is_file() && entry.file_name() == PUBSPEC_FILE)
            .min_by_key(|entry| entry.depth())
            .and_then(|entry| entry.path().parent().map(ProjectRoot::new))
    }

    fn contains_tests(&self, root: &ProjectRoot, dir: &Path) -> bool {
        let dir = absolute(dir);
        if !dir.is_dir() {
            return false;
        }

        let suffix = self.config.test_file_suffix();
        self.walk(&dir).any(|entry| {
            entry.file_type().is_file()
                && entry.file_name().to_string_lossy().ends_with(suffix)
                && root
                    .relative_path(entry.path())
                    .is_some_and(|rel| rel.starts_with(TEST_DIR_PREFIX))
        })
    }

    fn is_supported_module(&self, context: &ExecutionContext) -> bool {
        let location = absolute(context.location());
        let root = match context {
            ExecutionContext::Directory { .. } => nearest_root(&location),
            ExecutionContext::Source { .. } => location.parent().and_then(nearest_root),
        };
        root.is_some_and(|root| self.is_framework_package(root.path()))
    }

    fn project_has_supported_module(&self, project: &Path) -> bool {
        self.walk(&absolute(project)).any(|entry| {
            entry.file_type().is_file()
                && entry.file_name() == PUBSPEC_FILE
                && entry
                    .path()
                    .parent()
                    .is_some_and(|root| self.is_framework_package(root))
        })
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

        let candidate = absolute(entry_file.as_deref().unwrap_or(position.file()));
        if candidate.extension().and_then(|ext| ext.to_str()) != Some("dart") {
            tracing::debug!("Entry candidate {:?} is not a Dart file", candidate);
            return None;
        }

        // Prefer the caller's buffer when it holds the candidate file
        let buffer = position
            .text
            .as_deref()
            .filter(|_| entry_file.is_none() || absolute(position.file()) == candidate);
        let text = match buffer {
            Some(text) => Cow::Borrowed(text),
            None => match std::fs::read_to_string(&candidate) {
                Ok(text) => Cow::Owned(text),
                Err(e) => {
                    tracing::debug!("Cannot read entry candidate {:?}: {}", candidate, e);
                    return None;
                }
            },
        };

        if !parser::declares_main(&text) {
            tracing::debug!("Entry candidate {:?} has no main function", candidate);
            return None;
        }
        Some(candidate)
    }
}
