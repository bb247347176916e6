use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{analyze_command, init_command, matches_command, resolve_command};

#[derive(Parser, Debug)]
#[command(name = "testscope")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the Flutter test run target at a location
    #[command(visible_alias = "r")]
    Resolve {
        /// File or directory with optional line and column (e.g., test/a_test.dart:12:5)
        location: String,

        /// Project directory the location belongs to (defaults to the current directory)
        #[arg(short, long)]
        project: Option<String>,

        /// Print the descriptor as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Check whether a saved descriptor already covers a location
    #[command(visible_alias = "m")]
    Matches {
        /// Path to a JSON descriptor produced by `resolve --json`
        descriptor: String,

        /// File or directory with optional line and column
        location: String,

        /// Project directory the location belongs to (defaults to the current directory)
        #[arg(short, long)]
        project: Option<String>,
    },
    /// List the test declarations in a Dart file
    #[command(visible_alias = "a")]
    Analyze {
        /// Path to the Dart test file
        filepath: String,
    },
    /// Initialize testscope configuration
    Init {
        /// Specify the current working directory
        #[arg(short, long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Resolve {
                location,
                project,
                json,
            } => resolve_command(&location, project.as_deref(), json),
            Commands::Matches {
                descriptor,
                location,
                project,
            } => matches_command(&descriptor, &location, project.as_deref()),
            Commands::Analyze { filepath } => analyze_command(&filepath),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
