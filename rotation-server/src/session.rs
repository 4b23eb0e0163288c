//! The day's station configuration.
//!
//! Down and accommodated stations are only meaningful for a single calendar
//! day. The session remembers the date it was last reset on and starts over
//! with a blank configuration as soon as it is read on a later date.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{Line, LineConfiguration};

/// Line configurations for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySession {
    current_date: NaiveDate,
    configurations: BTreeMap<Line, LineConfiguration>,
}

impl DailySession {
    /// A blank session for `date` covering `lines`.
    pub fn new(date: NaiveDate, lines: &[Line]) -> Self {
        Self {
            current_date: date,
            configurations: lines
                .iter()
                .map(|&line| (line, LineConfiguration::new(line)))
                .collect(),
        }
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// Start over on `new_date` with every line blank.
    pub fn reset(&mut self, new_date: NaiveDate) {
        self.current_date = new_date;
        for (&line, config) in self.configurations.iter_mut() {
            *config = LineConfiguration::new(line);
        }
    }

    /// Reset if `today` is not the session's date.
    ///
    /// Returns whether a reset happened.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if today == self.current_date {
            return false;
        }
        info!(from = %self.current_date, to = %today, "new day, clearing station configuration");
        self.reset(today);
        true
    }

    /// Configuration for one line, if the line is part of the session.
    pub fn configuration(&self, line: Line) -> Option<&LineConfiguration> {
        self.configurations.get(&line)
    }

    pub fn configurations(&self) -> &BTreeMap<Line, LineConfiguration> {
        &self.configurations
    }

    /// Replace the stored configuration with a freshly submitted one.
    ///
    /// Lines of the session missing from `submitted` become blank; lines not
    /// part of the session are ignored.
    pub fn apply(&mut self, mut submitted: BTreeMap<Line, LineConfiguration>) {
        for (&line, config) in self.configurations.iter_mut() {
            *config = submitted
                .remove(&line)
                .unwrap_or_else(|| LineConfiguration::new(line));
        }
    }
}

/// Shared, thread-safe handle to the process-wide [`DailySession`].
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<DailySession>>,
}

impl SessionStore {
    pub fn new(session: DailySession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    /// A copy of the session as of `today`, rolling it over first if needed.
    pub async fn snapshot(&self, today: NaiveDate) -> DailySession {
        {
            let guard = self.inner.read().await;
            if guard.current_date() == today {
                return guard.clone();
            }
        }
        let mut guard = self.inner.write().await;
        guard.roll_over(today);
        guard.clone()
    }

    /// Store a submitted configuration for `today` and return the result.
    pub async fn submit(
        &self,
        today: NaiveDate,
        submitted: BTreeMap<Line, LineConfiguration>,
    ) -> DailySession {
        let mut guard = self.inner.write().await;
        guard.roll_over(today);
        guard.apply(submitted);

        let configured = guard.configurations().values().filter(|c| !c.is_blank()).count();
        info!(date = %today, configured, "stored selections");
        guard.clone()
    }
}
