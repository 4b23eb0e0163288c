//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::rotation::ScheduleBuilder;

use super::download::{content_disposition, date_stamp};
use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Shown instead of a download when no line has any pairs.
const EMPTY_SCHEDULE: &str = "No operational stations available across any lines \
    based on current settings. Cannot generate a schedule.";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/schedule", post(generate_schedule))
        .route("/schedule/preview", get(preview_schedule))
        .route("/api/schedule", post(api_schedule))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn render<T: Template>(template: &T) -> Result<String, AppError> {
    template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Configuration form, pre-filled with today's selections.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let date = today();
    let session = state.session.snapshot(date).await;
    let template = IndexTemplate::new(&state.config, &session, date_stamp(date));
    Ok(Html(render(&template)?))
}

/// Store the submitted form and download the printable schedule.
async fn generate_schedule(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let configurations = parse_form(&fields, &state.config).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let date = today();
    let session = state.session.submit(date, configurations).await;

    let stamp = date_stamp(date);
    let schedule = ScheduleBuilder::new(&state.config).build(session.configurations(), &stamp);

    if schedule.is_empty() {
        return Err(AppError::Unprocessable {
            message: EMPTY_SCHEDULE.to_string(),
        });
    }

    info!(date = %stamp, pairs = schedule.pair_count(), "generated schedule");

    let html = render(&ScheduleTemplate::from_schedule(&schedule))?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&stamp)),
        ],
        html,
    )
        .into_response())
}

/// Printable schedule for today's stored selections, shown inline.
async fn preview_schedule(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let date = today();
    let session = state.session.snapshot(date).await;
    let schedule =
        ScheduleBuilder::new(&state.config).build(session.configurations(), &date_stamp(date));
    Ok(Html(render(&ScheduleTemplate::from_schedule(&schedule))?))
}

/// Build a schedule from JSON selections without touching the session.
async fn api_schedule(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| AppError::BadRequest {
        message: rejection.body_text(),
    })?;

    let configurations = req
        .configurations(&state.config)
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let date = req.date.clone().unwrap_or_else(|| date_stamp(today()));
    let schedule = ScheduleBuilder::new(&state.config).build(&configurations, &date);

    Ok(Json(ScheduleResponse::from_schedule(&schedule)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "Invalid selection",
            AppError::Unprocessable { .. } => "Nothing to schedule",
            AppError::Internal { .. } => "Something went wrong",
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::Unprocessable { message }
            | AppError::Internal { message } => message,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            AppError::Unprocessable { .. } => {
                Some("Every station on every line is marked down.".to_string())
            }
            AppError::BadRequest { .. } | AppError::Internal { .. } => None,
        }
    }

    fn log(&self) {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, reason = self.message(), "request failed");
        } else {
            warn!(%status, reason = self.message(), "request rejected");
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status();
        let page = ErrorTemplate {
            title: self.title().to_string(),
            message: self.message().to_string(),
            details: self.details(),
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => (status, format!("{}: {e}", self.message())).into_response(),
        }
    }
}

/// [`AppError`] rendered as JSON for API routes.
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.log();

        let body = Json(ErrorResponse {
            error: self.0.message().to_string(),
        });
        (self.0.status(), body).into_response()
    }
}
