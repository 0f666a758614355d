//! Request-level error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use std::fmt;

use padron_core::RegistryError;

pub type AppResult<T> = Result<T, AppError>;

/// Error carrying the response status and the client-visible message.
///
/// Resource routes answer failures under an `error` body key; the login
/// flow answers under `mensaje`. [`AppError::as_mensaje`] switches the key.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    key: &'static str,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            key: "error",
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Switch the body key to the login flow's `mensaje`.
    pub fn as_mensaje(mut self) -> Self {
        self.key = "mensaje";
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut body = Map::new();
        body.insert(self.key.to_string(), Value::String(self.message));
        (self.status, Json(Value::Object(body))).into_response()
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound => Self::not_found("Recurso no encontrado"),
            RegistryError::Database(err) => {
                tracing::error!(error = ?err, "database operation failed");
                Self::internal("Error interno del servidor")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn resource_errors_use_the_error_key() {
        let response = AppError::bad_request("Todos los campos son obligatorios").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Todos los campos son obligatorios");
    }

    #[tokio::test]
    async fn login_errors_use_the_mensaje_key() {
        let response = AppError::forbidden("Acceso denegado").as_mensaje().into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["mensaje"], "Acceso denegado");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn database_faults_are_masked() {
        let err = RegistryError::Database(sqlx::Error::PoolClosed);
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Error interno del servidor");
    }
}
