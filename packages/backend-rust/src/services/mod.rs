pub mod practice;
pub mod stats;
pub mod words;

use thiserror::Error;

use crate::db::is_unavailable;
use crate::response::AppError;

#[derive(Debug, Error)]
pub enum PracticeError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("sql error: {0}")]
    Sql(sqlx::Error),
}

impl From<sqlx::Error> for PracticeError {
    fn from(err: sqlx::Error) -> Self {
        if is_unavailable(&err) {
            Self::Unavailable(err.to_string())
        } else {
            Self::Sql(err)
        }
    }
}

impl From<PracticeError> for AppError {
    fn from(err: PracticeError) -> Self {
        match err {
            PracticeError::NotFound(message) => AppError::not_found(message),
            PracticeError::InvalidInput(message) => AppError::validation(message),
            PracticeError::Unavailable(message) => {
                tracing::warn!(error = %message, "practice store unavailable");
                AppError::service_unavailable("Service unavailable, please retry")
            }
            PracticeError::Sql(sql_err) => {
                tracing::warn!(error = %sql_err, "practice query failed");
                AppError::internal(sql_err.to_string())
            }
        }
    }
}
