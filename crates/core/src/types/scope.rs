use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The granularity of a run target.
///
/// Paths are absolute and filesystem-native. `Name::test_name` is never
/// empty and is always the unquoted value of a string literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum TestScope {
    /// A single named test within a file
    Name { test_name: String, file_path: PathBuf },
    /// Every test in a file
    File { file_path: PathBuf },
    /// Every test under a directory, recursively
    Dir { dir_path: PathBuf },
}

impl TestScope {
    pub fn for_test_name(test_name: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        TestScope::Name {
            test_name: test_name.into(),
            file_path: file_path.into(),
        }
    }

    pub fn for_file(file_path: impl Into<PathBuf>) -> Self {
        TestScope::File {
            file_path: file_path.into(),
        }
    }

    pub fn for_dir(dir_path: impl Into<PathBuf>) -> Self {
        TestScope::Dir {
            dir_path: dir_path.into(),
        }
    }

    /// The file or directory this scope targets, if it has one.
    ///
    /// A scope restored from storage may carry an empty path; that is
    /// reported as no path at all.
    pub fn path(&self) -> Option<&Path> {
        let path = match self {
            TestScope::Name { file_path, .. } | TestScope::File { file_path } => file_path,
            TestScope::Dir { dir_path } => dir_path,
        };
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    }

    pub fn test_name(&self) -> Option<&str> {
        match self {
            TestScope::Name { test_name, .. } => Some(test_name),
            _ => None,
        }
    }

    pub fn kind(&self) -> ScopeKind {
        match self {
            TestScope::Name { .. } => ScopeKind::Name,
            TestScope::File { .. } => ScopeKind::File,
            TestScope::Dir { .. } => ScopeKind::Dir,
        }
    }

    /// Human-readable name derived from the scope alone
    pub fn display_name(&self) -> String {
        match self {
            TestScope::Name { test_name, .. } => test_name.clone(),
            TestScope::File { file_path } => format!("tests in {}", file_label(file_path)),
            TestScope::Dir { dir_path } => format!("tests in {}", file_label(dir_path)),
        }
    }
}

/// Shape of a [`TestScope`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    Name,
    File,
    Dir,
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        let name = TestScope::for_test_name("computes total", "/p/test/cart_test.dart");
        assert_eq!(name.display_name(), "computes total");

        let file = TestScope::for_file("/p/test/cart_test.dart");
        assert_eq!(file.display_name(), "tests in cart_test.dart");

        let dir = TestScope::for_dir("/p/test/widgets");
        assert_eq!(dir.display_name(), "tests in widgets");
    }

    #[test]
    fn test_path_and_name_accessors() {
        let name = TestScope::for_test_name("foo", "/p/test/a_test.dart");
        assert_eq!(name.path(), Some(Path::new("/p/test/a_test.dart")));
        assert_eq!(name.test_name(), Some("foo"));
        assert_eq!(name.kind(), ScopeKind::Name);

        let dir = TestScope::for_dir("/p/test");
        assert_eq!(dir.test_name(), None);
        assert_eq!(dir.kind(), ScopeKind::Dir);
    }

    #[test]
    fn test_empty_path_is_no_path() {
        assert_eq!(TestScope::for_file("").path(), None);
        assert_eq!(TestScope::for_dir(PathBuf::new()).path(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let scope = TestScope::for_test_name("foo", "/p/test/a_test.dart");
        let json = serde_json::to_value(&scope).unwrap();
        assert_eq!(json["scope"], "name");
        assert_eq!(json["test_name"], "foo");
        assert_eq!(json["file_path"], "/p/test/a_test.dart");

        let parsed: TestScope =
            serde_json::from_str(r#"{"scope":"dir","dir_path":"/p/test"}"#).unwrap();
        assert_eq!(parsed, TestScope::for_dir("/p/test"));
    }
}
