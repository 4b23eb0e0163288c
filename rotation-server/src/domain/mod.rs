//! Domain types for station rotation.
//!
//! Stations, lines, per-line configuration and pairs. Types that can be
//! invalid enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod configuration;
mod line;
mod pair;
mod station;

pub use configuration::LineConfiguration;
pub use line::{InvalidLine, Line};
pub use pair::Pair;
pub use station::{InvalidStation, InvalidStationRange, Station, StationSet};
