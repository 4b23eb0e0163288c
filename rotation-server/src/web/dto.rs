//! Data transfer objects for web requests and responses.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::{InvalidLine, InvalidStation, Line, LineConfiguration, Pair, Station};
use crate::rotation::{RotationConfig, Schedule};

/// Form field prefix for a line's down stations, e.g. `down_B=5`.
pub const DOWN_PREFIX: &str = "down_";

/// Form field prefix for a line's accommodated stations, e.g. `accommodate_C=7`.
pub const ACCOMMODATE_PREFIX: &str = "accommodate_";

/// Errors in submitted station selections.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Line letter is not a known line
    #[error(transparent)]
    Line(#[from] InvalidLine),

    /// Line exists but is not part of the layout
    #[error("line {0} is not scheduled")]
    UnconfiguredLine(Line),

    /// Station is malformed or outside the station range
    #[error("line {line}: {source}")]
    Station { line: Line, source: InvalidStation },
}

#[derive(Debug, Clone, Copy)]
enum Selection {
    Down,
    Accommodate,
}

/// Accumulates station selections and turns them into line configurations.
struct Selections<'a> {
    config: &'a RotationConfig,
    down: BTreeMap<Line, BTreeSet<Station>>,
    fixed: BTreeMap<Line, BTreeSet<Station>>,
}

impl<'a> Selections<'a> {
    fn new(config: &'a RotationConfig) -> Self {
        Self {
            config,
            down: BTreeMap::new(),
            fixed: BTreeMap::new(),
        }
    }

    fn line(&self, letter: &str) -> Result<Line, FormError> {
        let line = Line::parse(letter)?;
        if !self.config.has_line(line) {
            return Err(FormError::UnconfiguredLine(line));
        }
        Ok(line)
    }

    /// Record a station already checked against the universe.
    fn select(
        &mut self,
        selection: Selection,
        line: Line,
        station: Result<Station, InvalidStation>,
    ) -> Result<(), FormError> {
        let station = station.map_err(|source| FormError::Station { line, source })?;

        let target = match selection {
            Selection::Down => &mut self.down,
            Selection::Accommodate => &mut self.fixed,
        };
        target.entry(line).or_default().insert(station);
        Ok(())
    }

    /// One configuration per layout line; unselected lines are blank.
    fn finish(mut self) -> BTreeMap<Line, LineConfiguration> {
        self.config
            .lines
            .iter()
            .map(|&line| {
                let config = LineConfiguration::new(line)
                    .with_non_operational(self.down.remove(&line).unwrap_or_default())
                    .with_fixed(self.fixed.remove(&line).unwrap_or_default());
                (line, config)
            })
            .collect()
    }
}

/// Parse the urlencoded configuration form.
///
/// Fields may repeat (one per checked station). Fields without a known
/// prefix are ignored. Accommodation on a line that does not support it is
/// dropped.
pub fn parse_form(
    fields: &[(String, String)],
    config: &RotationConfig,
) -> Result<BTreeMap<Line, LineConfiguration>, FormError> {
    let mut selections = Selections::new(config);

    for (key, value) in fields {
        let (selection, letter) = if let Some(letter) = key.strip_prefix(DOWN_PREFIX) {
            (Selection::Down, letter)
        } else if let Some(letter) = key.strip_prefix(ACCOMMODATE_PREFIX) {
            (Selection::Accommodate, letter)
        } else {
            continue;
        };

        let line = selections.line(letter)?;
        selections.select(selection, line, config.stations.parse_member(value))?;
    }

    Ok(selections.finish())
}

/// Request to build a schedule through the JSON API.
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    /// Date stamp to print (defaults to today)
    pub date: Option<String>,

    /// Selections keyed by line letter
    #[serde(default)]
    pub lines: BTreeMap<String, LineRequest>,
}

/// Station selections for one line.
///
/// Numbers are taken as plain integers so that a bad station is reported
/// against the station range rather than as malformed JSON.
#[derive(Debug, Default, Deserialize)]
pub struct LineRequest {
    /// Stations that are down today
    #[serde(default)]
    pub down: Vec<i64>,

    /// Stations to self-pair (accommodation-capable line only)
    #[serde(default)]
    pub accommodation: Vec<i64>,
}

impl ScheduleRequest {
    /// Validate the selections against the layout.
    pub fn configurations(
        &self,
        config: &RotationConfig,
    ) -> Result<BTreeMap<Line, LineConfiguration>, FormError> {
        let mut selections = Selections::new(config);
        let universe = &config.stations;

        for (letter, request) in &self.lines {
            let line = selections.line(letter)?;
            for &n in &request.down {
                selections.select(Selection::Down, line, universe.member_number(n))?;
            }
            for &n in &request.accommodation {
                selections.select(Selection::Accommodate, line, universe.member_number(n))?;
            }
        }

        Ok(selections.finish())
    }
}

/// A schedule in API responses.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// Date stamp, echoed unchanged
    pub date: String,

    /// Per-line results in layout order
    pub lines: Vec<LineScheduleResult>,

    /// Whether no line has any pairs
    pub empty: bool,
}

/// One line's pairs and down stations.
#[derive(Debug, Serialize)]
pub struct LineScheduleResult {
    pub line: Line,

    /// Pairs rendered as `"low-high"`
    pub pairs: Vec<Pair>,

    /// Down stations, ascending
    pub down: Vec<Station>,
}

impl ScheduleResponse {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            date: schedule.date.clone(),
            lines: schedule
                .lines
                .iter()
                .map(|l| LineScheduleResult {
                    line: l.line,
                    pairs: l.pairs.clone(),
                    down: l.down.clone(),
                })
                .collect(),
            empty: schedule.is_empty(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
