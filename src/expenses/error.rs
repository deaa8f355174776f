use axum::{http::StatusCode, response::IntoResponse};
use log::error;
use thiserror::Error;

use crate::{response::{detail_response, internal_server_error_response}, store::StoreError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    StoreError(#[from] StoreError),
    #[error("User not found")]
    UserNotFound(i64),
    #[error("Amount must be a positive number")]
    NonPositiveAmount(f64),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        return match self {
            Error::UserNotFound(_) => detail_response(StatusCode::NOT_FOUND, self.to_string()),
            Error::NonPositiveAmount(_) => detail_response(StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            Error::StoreError(_) => {
                error!("{}", self);
                internal_server_error_response(self.to_string())
            }
        };
    }
}
