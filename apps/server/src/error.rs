use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stonkgaze_analysis::AnalysisError;
use stonkgaze_ledger::LedgerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    // An upstream collaborator (completion service, ledger) failed
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    ServiceUnavailable(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::BadGateway(reason) => (StatusCode::BAD_GATEWAY, reason.clone()),
            ApiError::ServiceUnavailable(reason) => {
                (StatusCode::SERVICE_UNAVAILABLE, reason.clone())
            }
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::MissingApiKey => ApiError::ServiceUnavailable(err.to_string()),
            _ => ApiError::BadGateway(err.to_string()),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotConfigured => ApiError::ServiceUnavailable(err.to_string()),
            _ => ApiError::BadGateway(err.to_string()),
        }
    }
}
