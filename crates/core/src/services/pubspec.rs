//! Minimal `pubspec.yaml` model

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};

pub const PUBSPEC_FILE: &str = "pubspec.yaml";

/// The parts of a package manifest needed to classify the package
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pubspec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dependencies: Option<BTreeMap<String, serde_yaml::Value>>,
}

impl Pubspec {
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|e| Error::ManifestError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents, path)
    }

    /// Whether `dependency` is a regular (not dev) dependency
    pub fn depends_on(&self, dependency: &str) -> bool {
        self.dependencies
            .as_ref()
            .is_some_and(|deps| deps.contains_key(dependency))
    }
}
