use std::any::Any;

use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::ValidationError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub const NOT_FOUND: &str = "Ruta no encontrada";
pub const INTERNAL_SERVER_ERROR: &str = "Error interno del servidor";
pub const PAYLOAD_TOO_LARGE: &str = "Cuerpo de la solicitud demasiado grande";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("La ruta {method} {path} no existe")]
    NotFound { method: Method, path: String },

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn not_found(method: Method, path: impl Into<String>) -> Self {
        Self::NotFound {
            method,
            path: path.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Internal(_) | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BytesRejection> for ServerError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::Internal(rejection.body_text())
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ServerError::Validation(e) => {
                warn!(code = e.code(), "{}", e);
                ErrorResponse {
                    error: e.to_string(),
                    message: None,
                }
            }
            e @ ServerError::NotFound { .. } => ErrorResponse {
                error: NOT_FOUND.to_string(),
                message: Some(e.to_string()),
            },
            ServerError::PayloadTooLarge(message) => {
                warn!("{}", message);
                ErrorResponse {
                    error: PAYLOAD_TOO_LARGE.to_string(),
                    message: Some(message),
                }
            }
            ServerError::Internal(message) => {
                error!("Error: {}", message);
                ErrorResponse {
                    error: INTERNAL_SERVER_ERROR.to_string(),
                    message: Some(message),
                }
            }
            ServerError::Io(e) => {
                error!(%e, "IO error while handling request");
                ErrorResponse {
                    error: INTERNAL_SERVER_ERROR.to_string(),
                    message: Some(e.to_string()),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Turns a handler panic into the regular 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic payload".to_string()
    };

    ServerError::Internal(message).into_response()
}
