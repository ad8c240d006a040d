// ABOUTME: Axum response conversion for AppError
// ABOUTME: Renders errors as JSON bodies with the status mapped from the error code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::warn;

use super::{AppError, ErrorResponse};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        warn!(
            error.code = self.code.as_str(),
            http.status = status.as_u16(),
            upstream.status = ?self.upstream_status,
            "Request failed: {}",
            self.message
        );

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
