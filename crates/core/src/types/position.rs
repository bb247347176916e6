use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A line/column location in a source text. Both fields are 0-based and
/// `character` counts bytes from the start of the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// Convert to a byte offset into `text`, clamping past-the-end lines and
    /// columns to the nearest valid offset.
    pub fn to_offset(self, text: &str) -> usize {
        let mut line_start = 0;
        for _ in 0..self.line {
            match text[line_start..].find('\n') {
                Some(idx) => line_start += idx + 1,
                None => return text.len(),
            }
        }

        let line_end = text[line_start..]
            .find('\n')
            .map(|idx| line_start + idx)
            .unwrap_or(text.len());
        let offset = (line_start + self.character as usize).min(line_end);

        // Never split a multi-byte character
        let mut offset = offset;
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    /// Convert a byte offset back into a line/column position.
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let offset = offset.min(text.len());
        let before = &text[..offset];
        let line = before.matches('\n').count() as u32;
        let line_start = before.rfind('\n').map(|idx| idx + 1).unwrap_or(0);
        Self {
            line,
            character: (offset - line_start) as u32,
        }
    }
}

/// An opaque locator into a specific file at a specific byte offset.
///
/// `text` carries the buffer contents when the caller has them (for example
/// an unsaved editor buffer); otherwise collaborators read `file` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePosition {
    pub file: PathBuf,
    pub offset: usize,
    pub text: Option<Arc<str>>,
}

impl SourcePosition {
    pub fn new(file: impl Into<PathBuf>, offset: usize) -> Self {
        Self {
            file: file.into(),
            offset,
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Build a position from a line/column pair over known buffer contents.
    pub fn at(file: impl Into<PathBuf>, text: impl Into<Arc<str>>, position: Position) -> Self {
        let text = text.into();
        let offset = position.to_offset(&text);
        Self {
            file: file.into(),
            offset,
            text: Some(text),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}
