use testscope_core::Position;

/// A command-line location: a path with an optional 1-based line and column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl Location {
    /// Zero-based position, or `None` when no line was given
    pub fn position(&self) -> Option<Position> {
        let line = self.line?;
        let column = self.column.unwrap_or(1);
        Some(Position::new(line.saturating_sub(1), column.saturating_sub(1)))
    }
}

/// Split `path[:line[:column]]`. Trailing segments that are not numbers stay
/// part of the path.
pub fn parse_location(arg: &str) -> Location {
    let Some((head, last)) = arg.rsplit_once(':') else {
        return whole_path(arg);
    };
    let Ok(last) = last.parse::<u32>() else {
        return whole_path(arg);
    };

    if let Some((path, line)) = head.rsplit_once(':') {
        if let Ok(line) = line.parse::<u32>() {
            return Location {
                path: path.to_string(),
                line: Some(line),
                column: Some(last),
            };
        }
    }

    Location {
        path: head.to_string(),
        line: Some(last),
        column: None,
    }
}

fn whole_path(arg: &str) -> Location {
    Location {
        path: arg.to_string(),
        line: None,
        column: None,
    }
}
