//! Askama templates for the web frontend.

use askama::Template;

use super::dto::{ACCOMMODATE_PREFIX, DOWN_PREFIX};
use crate::domain::{LineConfiguration, StationSet};
use crate::rotation::{LineSchedule, RotationConfig, Schedule};
use crate::session::DailySession;

// ============================================================================
// Page Templates
// ============================================================================

/// Configuration form (extends base.html).
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub date: String,
    pub lines: Vec<LineFormView>,
}

impl IndexTemplate {
    /// Build the form, pre-filled from the session.
    pub fn new(config: &RotationConfig, session: &DailySession, date: String) -> Self {
        let lines = config
            .lines
            .iter()
            .map(|&line| {
                let blank = LineConfiguration::new(line);
                let current = session.configuration(line).unwrap_or(&blank);
                LineFormView::from_configuration(&config.stations, current)
            })
            .collect();

        Self { date, lines }
    }
}

/// Error page (extends base.html).
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

/// Standalone printable schedule. Carries its own styles so the
/// downloaded file renders without the server.
#[derive(Template)]
#[template(path = "schedule.html")]
pub struct ScheduleTemplate {
    pub date: String,
    pub columns: Vec<Vec<LineScheduleView>>,
}

impl ScheduleTemplate {
    /// Lay the lines out in two columns, first half on the left.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let mut left: Vec<LineScheduleView> = schedule
            .lines
            .iter()
            .map(LineScheduleView::from_line)
            .collect();
        let right = left.split_off(left.len().div_ceil(2));

        Self {
            date: schedule.date.clone(),
            columns: vec![left, right],
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One line's checkboxes on the configuration form.
#[derive(Debug, Clone)]
pub struct LineFormView {
    pub line: String,
    pub accommodation: bool,
    pub stations: Vec<StationChoice>,
}

impl LineFormView {
    pub fn from_configuration(universe: &StationSet, config: &LineConfiguration) -> Self {
        let stations = universe
            .iter()
            .map(|station| StationChoice {
                number: station.get(),
                down: config.non_operational().contains(&station),
                accommodated: config.fixed().contains(&station),
            })
            .collect();

        Self {
            line: config.line().to_string(),
            accommodation: config.line().supports_accommodation(),
            stations,
        }
    }

    /// Form field name for this line's down stations.
    pub fn down_field(&self) -> String {
        format!("{DOWN_PREFIX}{}", self.line)
    }

    /// Form field name for this line's accommodated stations.
    pub fn accommodate_field(&self) -> String {
        format!("{ACCOMMODATE_PREFIX}{}", self.line)
    }
}

/// A station checkbox.
#[derive(Debug, Clone)]
pub struct StationChoice {
    pub number: u8,
    pub down: bool,
    pub accommodated: bool,
}

/// One line on the printable schedule.
#[derive(Debug, Clone)]
pub struct LineScheduleView {
    pub line: String,
    pub pairs: Vec<String>,
    pub down: Vec<String>,
}

impl LineScheduleView {
    pub fn from_line(line: &LineSchedule) -> Self {
        Self {
            line: line.line.to_string(),
            pairs: line.pairs.iter().map(|p| p.to_string()).collect(),
            down: line.down.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Down stations as a comma-separated list, e.g. "2, 5, 19".
    pub fn down_summary(&self) -> String {
        self.down.join(", ")
    }
}
