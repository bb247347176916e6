pub mod context;
pub mod descriptor;
pub mod position;
pub mod scope;

pub use context::ExecutionContext;
pub use descriptor::{ConfigurationKind, RunDescriptor};
pub use position::{Position, SourcePosition};
pub use scope::{ScopeKind, TestScope};
