//! Station rotation.
//!
//! This module pairs the operational stations of each line and assembles
//! the per-line pair lists into a dated schedule. Everything here is pure:
//! the date stamp is supplied by the caller and identical inputs always
//! produce identical schedules.

mod config;
mod engine;
mod schedule;

pub use config::RotationConfig;
pub use engine::{generate_pairs, mirror_pair, operational_stations, pairs_for};
pub use schedule::{LineSchedule, Schedule, ScheduleBuilder};
