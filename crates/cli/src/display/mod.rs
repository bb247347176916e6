pub mod formatter;

pub use formatter::{print_command, print_descriptor, scope_label};
