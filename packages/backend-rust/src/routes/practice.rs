use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::response::{json_error, AppError};
use crate::services::practice::{self, SubmissionInput};
use crate::state::AppState;

use super::{get_query_param, service_unavailable, split_body};

#[derive(Debug, Deserialize)]
struct ValidateSentenceRequest {
    word_id: i64,
    sentence: String,
    #[serde(default)]
    duration_seconds: Option<i64>,
    #[serde(default)]
    minutes_learned: Option<i64>,
    #[serde(default)]
    client_time_iso: Option<String>,
}

pub async fn validate_sentence(State(state): State<AppState>, req: Request<Body>) -> Response {
    let (_parts, body_bytes) = match split_body(req).await {
        Ok(value) => value,
        Err(res) => return res,
    };

    let payload: ValidateSentenceRequest = match serde_json::from_slice(&body_bytes) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "rejecting malformed submission");
            return json_error(
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid request body",
            )
            .into_response();
        }
    };

    let Some(proxy) = state.db_proxy() else {
        return service_unavailable();
    };

    let input = SubmissionInput {
        word_id: payload.word_id,
        sentence: payload.sentence,
        duration_seconds: payload.duration_seconds,
        minutes_learned: payload.minutes_learned,
        client_time_iso: payload.client_time_iso,
    };

    match practice::score_submission(proxy.as_ref(), state.practice_zone(), input, Utc::now()).await
    {
        Ok(result) => Json(result).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn history(State(state): State<AppState>, req: Request<Body>) -> Response {
    let query = req.uri().query().unwrap_or("");
    let limit = get_query_param(query, "limit").and_then(|v| v.trim().parse::<i64>().ok());

    let Some(proxy) = state.db_proxy() else {
        return service_unavailable();
    };

    match practice::list_history(proxy.as_ref(), limit).await {
        Ok(items) => Json(items).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
