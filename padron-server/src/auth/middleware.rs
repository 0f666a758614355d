//! Token-check guard for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{cookie, jwt};
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// Authenticated account attached to the request by [`require_session`].
#[derive(Debug, Clone, Copy)]
pub struct SessionIdentity {
    pub id_usuario: i64,
}

/// Rejects requests without a valid session token; on success the
/// [`SessionIdentity`] is available to downstream handlers via `Extension`.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let token = cookie::session_token(request.headers())
        .ok_or_else(|| AppError::forbidden("Acceso denegado").as_mensaje())?;

    let claims = jwt::verify_session_token(state.token_keys(), &token)
        .map_err(|_| AppError::unauthorized("Token inválido").as_mensaje())?;

    request.extensions_mut().insert(SessionIdentity {
        id_usuario: claims.sub,
    });
    Ok(next.run(request).await)
}
