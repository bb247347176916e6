//! testscope - resolve Flutter test run targets from editor positions
//!
//! This crate provides functionality to:
//! - Find the test declaration enclosing a position in a Dart file
//! - Validate that a file or directory lies in a Flutter package's tests
//! - Build single-test, file or directory run descriptors
//! - Decide whether an existing descriptor already covers a context
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod parser;
pub mod producer;
pub mod resolution;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::TestCommand;
pub use config::Config;
pub use interfaces::{ProjectModel, ProjectRoot, SyntaxLookup};
pub use producer::TestConfigProducer;
pub use resolution::{ConfigurationMatcher, ScopeResolver, ScopeValidator, TestNameExtractor};
pub use services::{DartSyntax, PubProjectModel};
