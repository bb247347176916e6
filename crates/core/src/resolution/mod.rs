//! Resolution and matching of test run targets
//!
//! Given an execution context, decide whether it denotes a single test, a
//! test file or a directory of tests, and whether an existing descriptor
//! already covers it. Every outcome is `Option`/`bool`: a context that does
//! not denote a test is not an error.

pub mod extractor;
pub mod matcher;
pub mod resolver;
pub mod validator;

#[cfg(test)]
pub(crate) mod fakes;

pub use extractor::TestNameExtractor;
pub use matcher::ConfigurationMatcher;
pub use resolver::ScopeResolver;
pub use validator::ScopeValidator;

/// Function name that introduces a named test
pub const TEST_IDENTIFIER: &str = "test";

/// Path prefix, relative to a package root, of the package's tests
pub const TEST_DIR_PREFIX: &str = "test/";
