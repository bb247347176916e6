use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use testscope_core::{ExecutionContext, Position, SourcePosition};
use tracing::debug;

use super::parser::Location;

/// Absolute form of `path`, relative paths taken from the current directory
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()
            .context("Failed to get current directory")?
            .join(path))
    }
}

/// The project directory: `--project` when given, the current directory otherwise
pub fn resolve_project(project: Option<&str>) -> Result<PathBuf> {
    match project {
        Some(project) => absolute_path(Path::new(project)),
        None => env::current_dir().context("Failed to get current directory"),
    }
}

/// Turn a parsed location into the context the resolver works on.
///
/// Directories become directory contexts. Files are read so the scanner sees
/// the same text the position was computed against; without a line the
/// position is the start of the file.
pub fn build_context(location: &Location, project: &Path) -> Result<ExecutionContext> {
    let path = absolute_path(Path::new(&location.path))?;
    if !path.exists() {
        return Err(anyhow::anyhow!("Path not found: {}", path.display()));
    }

    if path.is_dir() {
        debug!("Directory context for {}", path.display());
        return Ok(ExecutionContext::directory(project, path));
    }

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let position = location.position().unwrap_or(Position::new(0, 0));
    debug!("Source context for {} at {:?}", path.display(), position);

    let source = SourcePosition::at(&path, text, position);
    Ok(ExecutionContext::source(project, source))
}
