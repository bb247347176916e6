//! Rendering descriptors as `flutter test` command lines

pub mod test_command;

// Re-export commonly used types
pub use test_command::TestCommand;
