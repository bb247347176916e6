pub mod analyze;
pub mod init;
pub mod matches;
pub mod resolve;

pub use analyze::analyze_command;
pub use init::init_command;
pub use matches::matches_command;
pub use resolve::resolve_command;
