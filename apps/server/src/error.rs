// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing file in request")]
    MissingFile,

    #[error("File too large: maximum size is {max_mb} MB")]
    FileTooLarge { max_mb: usize },

    #[error("Invalid image size: {0} (expected 16-4096)")]
    InvalidSize(u32),

    #[error("Invalid floor-plan container: {0}")]
    InvalidContainer(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Join error")]
    Join(#[from] tokio::task::JoinError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::MissingFile => (StatusCode::BAD_REQUEST, "MISSING_FILE"),
            ApiError::FileTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "FILE_TOO_LARGE"),
            ApiError::InvalidSize(_) => (StatusCode::BAD_REQUEST, "INVALID_SIZE"),
            ApiError::InvalidContainer(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_CONTAINER")
            }
            ApiError::Conversion(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONVERSION_ERROR"),
            ApiError::Multipart(_) => (StatusCode::BAD_REQUEST, "MULTIPART_ERROR"),
            ApiError::Join(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TASK_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<planrast_raster::Error> for ApiError {
    fn from(err: planrast_raster::Error) -> Self {
        match err {
            planrast_raster::Error::Decode(e) => ApiError::InvalidContainer(e.to_string()),
            other => ApiError::Conversion(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Conversion(err.to_string())
    }
}
