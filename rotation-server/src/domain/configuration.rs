//! Per-line station configuration.

use std::collections::BTreeSet;

use super::{Line, Station};

/// The day's configuration for one line.
///
/// Holds the stations that are temporarily down and, for a line that
/// supports accommodation, the stations that must be self-paired. Both are
/// sets, so duplicates collapse and iteration is ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineConfiguration {
    line: Line,
    non_operational: BTreeSet<Station>,
    fixed: BTreeSet<Station>,
}

impl LineConfiguration {
    /// A configuration with every station operational and none fixed.
    pub fn new(line: Line) -> Self {
        Self {
            line,
            non_operational: BTreeSet::new(),
            fixed: BTreeSet::new(),
        }
    }

    /// Builder form of [`set_non_operational`](Self::set_non_operational).
    pub fn with_non_operational(mut self, stations: impl IntoIterator<Item = Station>) -> Self {
        self.set_non_operational(stations);
        self
    }

    /// Builder form of [`set_fixed`](Self::set_fixed).
    pub fn with_fixed(mut self, stations: impl IntoIterator<Item = Station>) -> Self {
        self.set_fixed(stations);
        self
    }

    /// Replace the set of stations that are down today.
    pub fn set_non_operational(&mut self, stations: impl IntoIterator<Item = Station>) {
        self.non_operational = stations.into_iter().collect();
    }

    /// Replace the set of accommodated stations.
    ///
    /// Has no effect on a line that does not support accommodation; its
    /// fixed set stays empty.
    pub fn set_fixed(&mut self, stations: impl IntoIterator<Item = Station>) {
        if self.line.supports_accommodation() {
            self.fixed = stations.into_iter().collect();
        }
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn non_operational(&self) -> &BTreeSet<Station> {
        &self.non_operational
    }

    pub fn fixed(&self) -> &BTreeSet<Station> {
        &self.fixed
    }

    /// Whether nothing is down and nothing is accommodated.
    pub fn is_blank(&self) -> bool {
        self.non_operational.is_empty() && self.fixed.is_empty()
    }
}
