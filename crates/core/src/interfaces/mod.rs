//! Capability interfaces for the collaborators the resolution core consumes
//!
//! The resolver, validator and matcher only ever talk to these traits, so
//! they can run against the filesystem-backed services or deterministic
//! in-memory fakes.

pub mod project_model;
pub mod syntax_lookup;

pub use project_model::{ProjectModel, ProjectRoot};
pub use syntax_lookup::{Argument, ArgumentKind, CallSite, RawLiteral, SyntaxLookup};
