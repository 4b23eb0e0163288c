//! Application state for the web layer.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::rotation::RotationConfig;
use crate::session::{DailySession, SessionStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Lines and station universe
    pub config: Arc<RotationConfig>,

    /// The day's submitted configuration
    pub session: SessionStore,
}

impl AppState {
    /// Create a new app state with a blank session starting on `today`.
    pub fn new(config: RotationConfig, today: NaiveDate) -> Self {
        let session = SessionStore::new(DailySession::new(today, &config.lines));
        Self {
            config: Arc::new(config),
            session,
        }
    }
}
