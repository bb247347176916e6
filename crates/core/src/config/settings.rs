use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_FRAMEWORK_DEPENDENCY: &str = "flutter";
pub const DEFAULT_TEST_FILE_SUFFIX: &str = "_test.dart";
pub const DEFAULT_COMMAND: &str = "flutter";
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[".dart_tool", "build", ".git", ".idea"];

/// File names searched for, in order, in each directory walking upwards
pub const CONFIG_FILE_NAMES: &[&str] = &[".testscope.json", "testscope.json"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Dependency that marks a package as using the supported framework
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_dependency: Option<String>,

    /// File name suffix that identifies a test file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_file_suffix: Option<String>,

    /// Directory names never descended into when scanning a project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored_dirs: Option<Vec<String>>,

    /// Program used to run tests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Extra arguments placed right after the `test` subcommand
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,
}

impl Config {
    /// A config with every default spelled out, as written by `init`
    pub fn with_defaults() -> Self {
        Self {
            framework_dependency: Some(DEFAULT_FRAMEWORK_DEPENDENCY.to_string()),
            test_file_suffix: Some(DEFAULT_TEST_FILE_SUFFIX.to_string()),
            ignored_dirs: Some(DEFAULT_IGNORED_DIRS.iter().map(|d| d.to_string()).collect()),
            command: Some(DEFAULT_COMMAND.to_string()),
            extra_args: Vec::new(),
        }
    }

    pub fn framework_dependency(&self) -> &str {
        self.framework_dependency
            .as_deref()
            .unwrap_or(DEFAULT_FRAMEWORK_DEPENDENCY)
    }

    pub fn test_file_suffix(&self) -> &str {
        self.test_file_suffix
            .as_deref()
            .unwrap_or(DEFAULT_TEST_FILE_SUFFIX)
    }

    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or(DEFAULT_COMMAND)
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        match &self.ignored_dirs {
            Some(dirs) => dirs.iter().any(|d| d == name),
            None => DEFAULT_IGNORED_DIRS.contains(&name),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = if start_path.is_file() {
            start_path.parent()?
        } else {
            start_path
        };

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config above `start_path`, or defaults when there
    /// is none
    pub fn load_for(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
