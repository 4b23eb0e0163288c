//! Station rotation server.
//!
//! A web application that pairs the work stations of each production line,
//! skipping stations that are down today and self-pairing accommodated
//! stations, and offers the result as a printable page.

pub mod config;
pub mod domain;
pub mod rotation;
pub mod session;
pub mod web;
