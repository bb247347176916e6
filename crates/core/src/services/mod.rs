//! Service implementations of the collaborator interfaces
//!
//! `DartSyntax` answers syntax queries with the Dart scanner in
//! [`crate::parser`]; `PubProjectModel` answers project queries from
//! `pubspec.yaml` files on disk.

pub mod dart_syntax;
pub mod pub_project_model;
pub mod pubspec;

pub use dart_syntax::DartSyntax;
pub use pub_project_model::PubProjectModel;
pub use pubspec::Pubspec;
