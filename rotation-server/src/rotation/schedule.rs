//! Schedule assembly across all lines.

use std::collections::BTreeMap;

use tracing::debug;

use super::config::RotationConfig;
use super::engine::pairs_for;
use crate::domain::{Line, LineConfiguration, Pair, Station};

/// Pairs for one line, plus the down stations that were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSchedule {
    pub line: Line,
    pub pairs: Vec<Pair>,
    /// Down stations within the universe, ascending.
    pub down: Vec<Station>,
}

/// The full rotation for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Date stamp exactly as supplied by the caller.
    pub date: String,

    /// One entry per configured line, in layout order.
    pub lines: Vec<LineSchedule>,
}

impl Schedule {
    /// Whether no line produced any pairs.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.pairs.is_empty())
    }

    /// Total number of pairs across all lines.
    pub fn pair_count(&self) -> usize {
        self.lines.iter().map(|l| l.pairs.len()).sum()
    }
}

/// Builds schedules against a fixed layout.
pub struct ScheduleBuilder<'a> {
    config: &'a RotationConfig,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new(config: &'a RotationConfig) -> Self {
        Self { config }
    }

    /// Pair every configured line.
    ///
    /// A line missing from `configurations` is treated as fully operational.
    /// Configurations for lines outside the layout are ignored. Never fails;
    /// a schedule with no pairs at all is still returned.
    pub fn build(
        &self,
        configurations: &BTreeMap<Line, LineConfiguration>,
        date: &str,
    ) -> Schedule {
        let universe = &self.config.stations;

        let lines = self
            .config
            .lines
            .iter()
            .map(|&line| {
                let config = configurations
                    .get(&line)
                    .cloned()
                    .unwrap_or_else(|| LineConfiguration::new(line));

                let pairs = pairs_for(universe, &config);
                let down: Vec<Station> = config
                    .non_operational()
                    .iter()
                    .copied()
                    .filter(|s| universe.contains(*s))
                    .collect();

                debug!(%line, pairs = pairs.len(), down = down.len(), "paired line");

                LineSchedule { line, pairs, down }
            })
            .collect();

        Schedule {
            date: date.to_string(),
            lines,
        }
    }
}
