//! Production line identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown line letter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line {0:?}")]
pub struct InvalidLine(String);

/// A production line.
///
/// The set of lines is closed. Line C is the only line whose stations can
/// be marked for accommodation (fixed self-pairing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Line {
    B,
    C,
    L,
    M,
    N,
    O,
}

impl Line {
    /// Every line, in display order.
    pub const ALL: [Line; 6] = [Line::B, Line::C, Line::L, Line::M, Line::N, Line::O];

    /// Parse a line from its letter (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, InvalidLine> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" => Ok(Line::B),
            "C" => Ok(Line::C),
            "L" => Ok(Line::L),
            "M" => Ok(Line::M),
            "N" => Ok(Line::N),
            "O" => Ok(Line::O),
            _ => Err(InvalidLine(s.to_string())),
        }
    }

    /// The line's letter.
    pub fn as_str(self) -> &'static str {
        match self {
            Line::B => "B",
            Line::C => "C",
            Line::L => "L",
            Line::M => "M",
            Line::N => "N",
            Line::O => "O",
        }
    }

    /// Whether stations on this line can be fixed as self-pairs.
    pub fn supports_accommodation(self) -> bool {
        matches!(self, Line::C)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
