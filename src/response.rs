use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::{Deserialize, Serialize};

///
/// Body of every error response. `detail` carries a human readable message.
///
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseModel {
    pub detail: String,
}

pub fn detail_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponseModel { detail: detail.into() }),
    )
        .into_response()
}

pub fn internal_server_error_response(detail: impl Into<String>) -> Response {
    detail_response(StatusCode::INTERNAL_SERVER_ERROR, detail)
}
