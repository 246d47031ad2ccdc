// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::config::API_KEY_VAR;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("No image data provided")]
    MissingImage,

    #[error("invalid request body: {0}")]
    InvalidBody(serde_json::Error),

    /// The provider answered with an error object of its own.
    #[error("Vision API error: {}", .0.as_deref().unwrap_or("no message"))]
    Upstream(Option<String>),

    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("{0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    // The request URL carries the API key as a query parameter.
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.without_url())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    fn new(error: &'static str) -> Self {
        Self { error, message: None, details: None }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingImage | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            AppError::MissingApiKey => ErrorBody {
                message: Some(format!("Please set {} in the server environment", API_KEY_VAR)),
                ..ErrorBody::new("API key not configured")
            },
            AppError::MissingImage => ErrorBody::new("No image data provided"),
            AppError::InvalidBody(err) => ErrorBody {
                message: Some(err.to_string()),
                ..ErrorBody::new("No image data provided")
            },
            AppError::Upstream(details) => ErrorBody {
                details: details.clone(),
                ..ErrorBody::new("Vision API error")
            },
            AppError::Transport(_) | AppError::Internal(_) => ErrorBody {
                message: Some(self.to_string()),
                ..ErrorBody::new("Internal server error")
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "recognize request failed");
        } else {
            tracing::warn!(error = %self, "rejected recognize request");
        }
        (status, Json(self.body())).into_response()
    }
}
