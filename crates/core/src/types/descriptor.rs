use serde::{Deserialize, Serialize};

use super::scope::TestScope;
use crate::error::Result;

/// A reusable run target: a [`TestScope`] plus a generated display name.
///
/// The name is always derived from the current scope. Replacing the scope
/// replaces it as a whole and regenerates the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDescriptor {
    name: String,
    #[serde(flatten)]
    scope: TestScope,
}

impl RunDescriptor {
    pub fn new(scope: TestScope) -> Self {
        Self {
            name: scope.display_name(),
            scope,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &TestScope {
        &self.scope
    }

    pub fn set_scope(&mut self, scope: TestScope) {
        self.name = scope.display_name();
        self.scope = scope;
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The type of a run configuration competing for the same context
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationKind {
    FlutterTest,
    DartTest,
    Other(String),
}

impl ConfigurationKind {
    pub fn is_dart_test(&self) -> bool {
        matches!(self, ConfigurationKind::DartTest)
    }
}
