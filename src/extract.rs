use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, FromRequest, FromRequestParts},
    http::StatusCode,
    response::IntoResponse,
};
use log::debug;
use thiserror::Error;

use crate::response::detail_response;

///
/// `axum::Json` with every rejection (bad syntax, missing fields, wrong
/// types, wrong content type) reported as 422 Unprocessable Entity.
///
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Rejection))]
pub struct AppJson<T>(pub T);

///
/// `axum::extract::Query` with unparsable parameters reported as 422.
///
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Rejection))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, Error)]
pub enum Rejection {
    #[error("{}", .0.body_text())]
    Json(#[from] JsonRejection),
    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),
}

impl IntoResponse for Rejection {
    fn into_response(self) -> axum::response::Response {
        debug!("Rejected request: {}", self);
        detail_response(StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
    }
}
