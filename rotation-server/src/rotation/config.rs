//! Rotation layout configuration.

use crate::domain::{Line, StationSet};

/// The fixed layout that every schedule is built against.
#[derive(Debug, Clone)]
pub struct RotationConfig {
    /// Lines to schedule, in display order.
    pub lines: Vec<Line>,

    /// Station universe shared by every line.
    pub stations: StationSet,
}

impl RotationConfig {
    /// Create a new configuration with the given layout.
    pub fn new(lines: Vec<Line>, stations: StationSet) -> Self {
        Self { lines, stations }
    }

    /// Whether the line is part of this layout.
    pub fn has_line(&self, line: Line) -> bool {
        self.lines.contains(&line)
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            lines: Line::ALL.to_vec(),
            stations: StationSet::default(),
        }
    }
}
