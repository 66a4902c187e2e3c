use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::response::AppError;
use crate::services::stats::get_summary;
use crate::state::AppState;

use super::{get_query_param, service_unavailable};

pub async fn summary(State(state): State<AppState>, req: Request<Body>) -> Response {
    let query = req.uri().query().unwrap_or("");
    let client_date = get_query_param(query, "client_date").filter(|v| !v.trim().is_empty());

    let Some(proxy) = state.db_proxy() else {
        return service_unavailable();
    };

    match get_summary(
        proxy.as_ref(),
        state.practice_zone(),
        client_date.as_deref(),
        Utc::now(),
    )
    .await
    {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
