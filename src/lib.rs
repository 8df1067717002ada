#![allow(clippy::module_inception)]

use std::{fmt::Display, fs, io, path::Path};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Location of a token's first character.
///
/// `line` starts at 1. `column` starts at 0 and is advanced before each
/// rune is classified, so the first rune of a line sits at column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 0 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` in `file`, without its line ending.
pub fn get_line_at(file: &Path, line: u32) -> io::Result<Option<String>> {
    let content = fs::read_to_string(file)?;

    if line == 0 {
        return Ok(None);
    }

    Ok(content
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r').to_string()))
}
