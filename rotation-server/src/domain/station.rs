//! Station identifiers and the station universe.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a station number is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStation {
    /// Input is not a station number at all
    #[error("invalid station {0:?}: not a number")]
    NotANumber(String),

    /// Station numbers start at 1
    #[error("invalid station: numbers start at 1")]
    Zero,

    /// Station is not part of the line's universe
    #[error("station {station} is outside the range {first}-{last}")]
    OutOfRange { station: i64, first: u8, last: u8 },
}

/// Error returned when building a station range with bad bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station range {first}-{last}: {reason}")]
pub struct InvalidStationRange {
    first: u8,
    last: u8,
    reason: &'static str,
}

/// A positive station number on a production line.
///
/// Stations carry no attributes beyond their number. This type guarantees
/// that any `Station` value is non-zero.
///
/// # Examples
///
/// ```
/// use rotation_server::domain::Station;
///
/// let s = Station::parse("7").unwrap();
/// assert_eq!(s.get(), 7);
///
/// // Zero is rejected
/// assert!(Station::new(0).is_err());
///
/// // Non-numeric input is rejected
/// assert!(Station::parse("seven").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Station(u8);

impl Station {
    /// Create a station from its number.
    pub fn new(number: u8) -> Result<Self, InvalidStation> {
        if number == 0 {
            return Err(InvalidStation::Zero);
        }
        Ok(Station(number))
    }

    /// Create a station from any integer, as found in JSON or form input.
    ///
    /// Numbers that cannot name a station at all are out of the range
    /// `1-255`.
    pub fn from_number(number: i64) -> Result<Self, InvalidStation> {
        match u8::try_from(number) {
            Ok(n) => Self::new(n),
            Err(_) => Err(InvalidStation::OutOfRange {
                station: number,
                first: 1,
                last: u8::MAX,
            }),
        }
    }

    /// Parse a station number from text, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        let trimmed = s.trim();
        let number = trimmed
            .parse::<i64>()
            .map_err(|_| InvalidStation::NotANumber(trimmed.to_string()))?;
        Self::from_number(number)
    }

    /// Returns the station number.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Station {
    type Error = InvalidStation;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Station::new(number)
    }
}

impl From<Station> for u8 {
    fn from(station: Station) -> u8 {
        station.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed universe of stations on a line: a contiguous range `first..=last`.
///
/// Immutable once built. Iteration is always ascending and never repeats
/// a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationSet {
    first: Station,
    last: Station,
}

impl StationSet {
    /// Number of stations on every line in the default layout.
    pub const DEFAULT_LAST: u8 = 20;

    /// Build the range `first..=last`.
    pub fn range(first: u8, last: u8) -> Result<Self, InvalidStationRange> {
        if first == 0 {
            return Err(InvalidStationRange {
                first,
                last,
                reason: "stations start at 1",
            });
        }
        if first > last {
            return Err(InvalidStationRange {
                first,
                last,
                reason: "first station is after last station",
            });
        }
        Ok(Self {
            first: Station(first),
            last: Station(last),
        })
    }

    /// The lowest station in the universe.
    pub fn first(&self) -> Station {
        self.first
    }

    /// The highest station in the universe.
    pub fn last(&self) -> Station {
        self.last
    }

    /// Whether the station belongs to this universe.
    pub fn contains(&self, station: Station) -> bool {
        self.first <= station && station <= self.last
    }

    /// Number of stations in the universe.
    pub fn len(&self) -> usize {
        usize::from(self.last.0 - self.first.0) + 1
    }

    /// Always false: a range holds at least one station.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Stations in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Station> + '_ {
        (self.first.0..=self.last.0).map(Station)
    }

    /// Check that a station belongs to this universe.
    pub fn member(&self, station: Station) -> Result<Station, InvalidStation> {
        if self.contains(station) {
            Ok(station)
        } else {
            Err(self.out_of_range(i64::from(station.get())))
        }
    }

    /// Check that a raw number names a station of this universe.
    pub fn member_number(&self, number: i64) -> Result<Station, InvalidStation> {
        match Station::from_number(number) {
            Ok(station) => self.member(station),
            Err(InvalidStation::OutOfRange { .. }) => Err(self.out_of_range(number)),
            Err(e) => Err(e),
        }
    }

    /// Parse a station number and check it belongs to this universe.
    pub fn parse_member(&self, s: &str) -> Result<Station, InvalidStation> {
        match Station::parse(s) {
            Ok(station) => self.member(station),
            Err(InvalidStation::OutOfRange { station, .. }) => Err(self.out_of_range(station)),
            Err(e) => Err(e),
        }
    }

    fn out_of_range(&self, station: i64) -> InvalidStation {
        InvalidStation::OutOfRange {
            station,
            first: self.first().get(),
            last: self.last().get(),
        }
    }
}

impl Default for StationSet {
    fn default() -> Self {
        Self {
            first: Station(1),
            last: Station(Self::DEFAULT_LAST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(n: u8) -> Station {
        Station::new(n).unwrap()
    }

    #[test]
    fn parse_valid_station() {
        assert_eq!(Station::parse("1").unwrap().get(), 1);
        assert_eq!(Station::parse("20").unwrap().get(), 20);
        assert_eq!(Station::parse(" 7 ").unwrap().get(), 7);
    }

    #[test]
    fn reject_zero() {
        assert_eq!(Station::new(0), Err(InvalidStation::Zero));
        assert_eq!(Station::parse("0"), Err(InvalidStation::Zero));
    }

    #[test]
    fn reject_non_numeric() {
        assert!(matches!(
            Station::parse("seven"),
            Err(InvalidStation::NotANumber(_))
        ));
        assert!(Station::parse("").is_err());
        assert!(matches!(
            Station::parse("3.5"),
            Err(InvalidStation::NotANumber(_))
        ));
    }

    #[test]
    fn large_and_negative_numbers_are_out_of_range() {
        assert_eq!(
            Station::parse("300"),
            Err(InvalidStation::OutOfRange {
                station: 300,
                first: 1,
                last: 255
            })
        );
        assert!(matches!(
            Station::parse("-3"),
            Err(InvalidStation::OutOfRange { station: -3, .. })
        ));
        assert_eq!(Station::from_number(255).map(Station::get), Ok(255));
        assert_eq!(Station::from_number(0), Err(InvalidStation::Zero));
    }

    #[test]
    fn universe_reports_its_own_bounds() {
        let set = StationSet::default();
        assert_eq!(
            set.parse_member("300").unwrap_err().to_string(),
            "station 300 is outside the range 1-20"
        );
        assert_eq!(
            set.member_number(-1).unwrap_err().to_string(),
            "station -1 is outside the range 1-20"
        );
        assert_eq!(
            set.member_number(256).unwrap_err().to_string(),
            "station 256 is outside the range 1-20"
        );
        assert_eq!(set.member_number(0), Err(InvalidStation::Zero));
        assert_eq!(set.member_number(20).map(Station::get), Ok(20));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(st(12).to_string(), "12");
        assert_eq!(format!("{:?}", st(12)), "Station(12)");
    }

    #[test]
    fn serde_as_number() {
        let json = serde_json::to_string(&st(4)).unwrap();
        assert_eq!(json, "4");
        let back: Station = serde_json::from_str("4").unwrap();
        assert_eq!(back, st(4));
        assert!(serde_json::from_str::<Station>("0").is_err());
    }

    #[test]
    fn default_universe_is_one_to_twenty() {
        let set = StationSet::default();
        let numbers: Vec<u8> = set.iter().map(Station::get).collect();
        assert_eq!(numbers, (1..=20).collect::<Vec<_>>());
        assert_eq!(set.len(), 20);
    }

    #[test]
    fn range_bounds_validated() {
        assert!(StationSet::range(0, 5).is_err());
        assert!(StationSet::range(6, 5).is_err());
        let single = StationSet::range(5, 5).unwrap();
        assert_eq!(single.len(), 1);
        assert!(!single.is_empty());
    }

    #[test]
    fn membership() {
        let set = StationSet::range(3, 8).unwrap();
        assert!(set.contains(st(3)));
        assert!(set.contains(st(8)));
        assert!(!set.contains(st(2)));
        assert!(!set.contains(st(9)));

        assert_eq!(set.parse_member("4"), Ok(st(4)));
        assert_eq!(
            set.parse_member("9"),
            Err(InvalidStation::OutOfRange {
                station: 9,
                first: 3,
                last: 8
            })
        );
    }

    #[test]
    fn out_of_range_message() {
        let err = StationSet::default().parse_member("21").unwrap_err();
        assert_eq!(err.to_string(), "station 21 is outside the range 1-20");
    }
}
