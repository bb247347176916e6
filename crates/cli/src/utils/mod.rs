pub mod context;
pub mod parser;

pub use context::{build_context, resolve_project};
pub use parser::{Location, parse_location};
