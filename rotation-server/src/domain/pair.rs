//! Station pairs.

use std::fmt;

use serde::{Serialize, Serializer};

use super::Station;

/// Two stations working together, rendered as `"low-high"`.
///
/// A pair whose endpoints are equal is a self-pair: either an accommodated
/// station or the unmatched middle of an odd mirror pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    low: Station,
    high: Station,
}

impl Pair {
    /// Pair two stations, ordering the endpoints low-high.
    pub fn new(a: Station, b: Station) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// A station paired with itself.
    pub fn solo(station: Station) -> Self {
        Self {
            low: station,
            high: station,
        }
    }

    pub fn low(&self) -> Station {
        self.low
    }

    pub fn high(&self) -> Station {
        self.high
    }

    /// Whether both endpoints are the same station.
    pub fn is_solo(&self) -> bool {
        self.low == self.high
    }

    /// The distinct stations in this pair (one for a self-pair).
    pub fn stations(&self) -> impl Iterator<Item = Station> {
        let second = (!self.is_solo()).then_some(self.high);
        std::iter::once(self.low).chain(second)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
