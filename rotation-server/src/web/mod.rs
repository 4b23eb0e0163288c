//! Web layer for station rotation.
//!
//! Serves the configuration form, turns submissions into a printable
//! schedule download, and exposes the same pairing over a JSON API.

mod download;
mod dto;
mod routes;
mod state;
pub mod templates;

pub use download::{content_disposition, date_stamp, download_file_name};
pub use dto::*;
pub use routes::{ApiError, AppError, create_router};
pub use state::AppState;
pub use templates::*;
