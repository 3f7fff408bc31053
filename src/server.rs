//! HTTP front end for the visualiser.
//!
//! Routes:
//! - `GET /` serves the single-page UI
//! - `POST /api/visualise` takes `{"input": "...", "mode": "..."}` and returns
//!   `{"items": [...]}`
//! - `GET /api/download?format=json|csv&input=...&mode=...` returns the same
//!   rows as a file attachment
//!
//! Validation failures come back as `400` with the error message as the body.
//! Every request is traced at debug level.

use crate::analysis::{AnalysisRow, analyse};
use crate::errors::ViewError;
use crate::mode::{InputMode, resolve_input};
use crate::render::{Visualisation, render_csv, render_json};
use axum::{
    Json, Router,
    body::Bytes,
    extract::Query,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Body of `POST /api/visualise`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VisualiseRequest {
    #[serde(default)]
    pub input: String,
    /// `text`, `codepoints` or `bytes`; empty means text
    #[serde(default)]
    pub mode: String,
}

#[derive(Debug, Deserialize)]
struct DownloadParams {
    format: Option<String>,
    input: Option<String>,
    mode: Option<String>,
}

/// A failed request: status plus a plain-text message.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<ViewError> for ApiError {
    fn from(e: ViewError) -> Self {
        ApiError::bad_request(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, message = %self.message, "request rejected");
        (self.status, self.message).into_response()
    }
}

/// Build the router with every route wired up.
///
/// Each request gets a `request` span and start/finish events at debug level.
pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/visualise", post(visualise))
        .route("/api/download", get(download))
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "HTTP visualiser listening");
    axum::serve(listener, router()).await
}

async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn visualise(body: Bytes) -> Result<Json<Visualisation>, ApiError> {
    let request: VisualiseRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::bad_request("invalid JSON payload"))?;

    let items = analyse_request(&request.mode, &request.input)?;
    tracing::debug!(rows = items.len(), "visualised input");

    Ok(Json(Visualisation { items }))
}

async fn download(Query(params): Query<DownloadParams>) -> Result<Response, ApiError> {
    let format = params
        .format
        .as_deref()
        .map(str::to_lowercase)
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| "json".to_string());

    let rows = analyse_request(
        params.mode.as_deref().unwrap_or_default(),
        params.input.as_deref().unwrap_or_default(),
    )?;

    match format.as_str() {
        "json" => {
            let body =
                render_json(&rows).map_err(|_| ApiError::internal("failed to generate JSON"))?;
            Ok(attachment("application/json", "visualiser.json", body.into_bytes()))
        }
        "csv" => {
            let body =
                render_csv(&rows).map_err(|_| ApiError::internal("failed to generate CSV"))?;
            Ok(attachment("text/csv", "visualiser.csv", body))
        }
        _ => Err(ViewError::UnsupportedFormat(format).into()),
    }
}

fn analyse_request(mode: &str, input: &str) -> Result<Vec<AnalysisRow>, ApiError> {
    if input.trim().is_empty() {
        return Err(ApiError::bad_request("input is required"));
    }

    let mode: InputMode = mode.parse()?;
    let resolved = resolve_input(mode, input)?;
    Ok(analyse(&resolved.text)?)
}

fn attachment(content_type: &'static str, filename: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}
