use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::ports::chat_responder::ChatError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Attached to 5xx responses; only surfaced when diagnostic mode is on.
#[derive(Debug, Clone)]
pub struct DiagnosticDetail {
    pub error: String,
    pub detail: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("not found")]
    NotFound,
    #[error("internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let diagnostic = match &self {
            ApiError::Internal(source) => {
                tracing::error!(error = ?source, "request_failed");
                Some(DiagnosticDetail {
                    error: error.clone(),
                    detail: format!("{source:?}"),
                })
            }
            _ => None,
        };
        let mut res = (
            status,
            Json(ErrorBody {
                error,
                detail: None,
            }),
        )
            .into_response();
        if let Some(d) = diagnostic {
            res.extensions_mut().insert(d);
        }
        res
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::EmptyMessage => ApiError::BadRequest(err.to_string()),
            ChatError::TooLong { .. } => ApiError::PayloadTooLarge(err.to_string()),
            ChatError::Backend(_) => ApiError::Internal(anyhow::Error::new(err)),
        }
    }
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
