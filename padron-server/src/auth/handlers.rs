//! Login, logout, and session introspection handlers.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::{cookie, jwt, middleware::SessionIdentity};
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// Login payload. Fields stay optional so presence failures produce the
/// API's own 400 body instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub correo: Option<String>,
    #[serde(rename = "contraseña")]
    pub contrasena: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Response> {
    let missing = || AppError::bad_request("Faltan campos requeridos").as_mensaje();
    let Json(request) = payload.map_err(|_| missing())?;
    let (correo, contrasena) =
        match (non_blank(request.correo), non_blank(request.contrasena)) {
            (Some(correo), Some(contrasena)) => (correo, contrasena),
            _ => return Err(missing()),
        };

    let credential = state
        .credentials()
        .find_by_correo(&correo)
        .await?
        .ok_or_else(|| AppError::not_found("Usuario no encontrado").as_mensaje())?;

    let stored_hash = PasswordHash::new(&credential.password_hash)
        .map_err(|_| AppError::internal("Error interno del servidor"))?;
    Argon2::default()
        .verify_password(contrasena.as_bytes(), &stored_hash)
        .map_err(|_| AppError::unauthorized("Contraseña incorrecta").as_mensaje())?;

    let token = jwt::issue_session_token(state.token_keys(), credential.id_usuario)
        .map_err(|_| AppError::internal("Error interno del servidor"))?;

    let secure = state.config().environment.is_production();
    let cookie = cookie::session_cookie(&token, secure)
        .ok_or_else(|| AppError::internal("Error interno del servidor"))?;

    let mut response = Json(json!({
        "mensaje": "Inicio de sesión exitoso",
        "token": token,
    }))
    .into_response();
    response.headers_mut().append(header::SET_COOKIE, cookie);
    Ok(response)
}

/// Clears the session cookie. Idempotent: succeeds with or without a prior
/// login, and an already-issued token stays valid until its expiry.
pub async fn logout() -> Response {
    let mut response = Json(json!({ "mensaje": "Sesión cerrada exitosamente" })).into_response();
    response
        .headers_mut()
        .append(header::SET_COOKIE, cookie::clear_session_cookie());
    response
}

/// Identity behind the presented session token.
pub async fn current_session(
    Extension(identity): Extension<SessionIdentity>,
) -> Json<serde_json::Value> {
    Json(json!({ "id_usuario": identity.id_usuario }))
}

fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_accepts_the_accented_field_name() {
        let request: LoginRequest = serde_json::from_value(json!({
            "correo": "ana@example.com",
            "contraseña": "hunter2",
        }))
        .unwrap();
        assert_eq!(request.correo.as_deref(), Some("ana@example.com"));
        assert_eq!(request.contrasena.as_deref(), Some("hunter2"));
    }

    #[test]
    fn non_blank_rejects_whitespace_only_values() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("x".to_string())).as_deref(), Some("x"));
    }
}
