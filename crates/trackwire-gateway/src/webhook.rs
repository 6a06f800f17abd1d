//! Commit webhook and liveness handlers.
//!
//! `POST /webhook` classifies the commit message and creates one record in the
//! tracking sink per delivery. There is no idempotency key: duplicate
//! deliveries create duplicate records.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use trackwire_core::classify;
use trackwire_core::error::{ClientCode, TrackWireError};
use trackwire_core::record::{commit_title, TrackedRecord};

use crate::app_state::AppState;

/// Incoming commit event. Everything past the message is optional and
/// defaulted.
#[derive(Debug, Deserialize)]
pub struct CommitEvent {
    #[serde(default)]
    pub commit_message: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Unix millis.
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub branch: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CommitAccepted {
    pub success: bool,
    pub progress: u8,
    pub status: &'static str,
}

/// Error wrapper mapping `TrackWireError` onto an HTTP response.
pub struct ApiError(pub TrackWireError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl From<TrackWireError> for ApiError {
    fn from(e: TrackWireError) -> Self {
        ApiError(e)
    }
}

pub async fn handle_commit(
    State(state): State<AppState>,
    Json(event): Json<CommitEvent>,
) -> Result<Json<CommitAccepted>, ApiError> {
    let message = event
        .commit_message
        .as_deref()
        .ok_or_else(|| TrackWireError::Validation("commit_message is required".into()))?;

    tracing::info!(message = %message, "webhook received");

    let classification = classify::classify(message);

    let author = event.author.as_deref().unwrap_or("Unknown");
    let branch = event.branch.as_deref().unwrap_or("main");
    // zero and negative millis count as unset, matching upstream senders
    // that put a falsy placeholder in the field
    let timestamp = event
        .timestamp
        .filter(|&ms| ms > 0)
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .unwrap_or_else(Utc::now)
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    let record = TrackedRecord {
        title: commit_title(message),
        status: classification.status.into(),
        progress: classification.progress,
        description: format!("Author: {author}, Branch: {branch}"),
        timestamp,
    };

    state.sink().create_record(&record).await?;

    Ok(Json(CommitAccepted {
        success: true,
        progress: classification.progress,
        status: classification.status.as_str(),
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

/// Liveness endpoint; independent of the sink and the store.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
