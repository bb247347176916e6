//! Configuration management for testscope

mod settings;

// Re-export main types
pub use settings::{
    CONFIG_FILE_NAMES, Config, DEFAULT_COMMAND, DEFAULT_FRAMEWORK_DEPENDENCY,
    DEFAULT_IGNORED_DIRS, DEFAULT_TEST_FILE_SUFFIX,
};
