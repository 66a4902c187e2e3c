use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::AppError;
use crate::services::words::word_of_the_day;
use crate::state::AppState;

pub async fn random_word(State(state): State<AppState>) -> Response {
    let Some(proxy) = state.db_proxy() else {
        return super::service_unavailable();
    };

    match word_of_the_day(proxy.as_ref()).await {
        Ok(word) => Json(word).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
