use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Errors produced by the cluster core.
///
/// Recognized control-plane conditions get their own variants so that callers
/// can react to them (retry, report, refuse). Everything the core does not
/// explicitly recognize passes through untouched as `Api`.
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("No usable cluster credentials: {0}")]
    Configuration(String),

    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: &'static str, name: String },

    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    #[error("Expected exactly one namespace named '{name}', got {count}")]
    AmbiguousResult { name: String, count: usize },

    #[error("Service account '{namespace}/{name}' not found")]
    AccountNotFound { namespace: String, name: String },

    #[error("Service account '{namespace}/{name}' has no linked secret yet")]
    SecretNotReady { namespace: String, name: String },

    #[error("Token in secret '{secret}' is unusable: {reason}")]
    TokenDecode { secret: String, reason: String },

    #[error("Node '{node}' reports unparseable {what} capacity '{value}'")]
    Capacity {
        node: String,
        what: &'static str,
        value: String,
    },

    #[error(transparent)]
    Api(#[from] kube::Error),
}

/// HTTP-facing error wrapper for the portal API.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("K8s API error: {0}")]
    K8sApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not ready: {0}")]
    NotReady(String),
}

impl From<ClusterError> for AppError {
    fn from(err: ClusterError) -> Self {
        match err {
            ClusterError::NotFound { .. } | ClusterError::AccountNotFound { .. } => {
                AppError::NotFound(err.to_string())
            }
            ClusterError::SecretNotReady { .. } => AppError::NotReady(err.to_string()),
            ClusterError::Configuration(_) => AppError::InternalServerError(err.to_string()),
            _ => AppError::K8sApiError(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::K8sApiError(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotReady(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}
