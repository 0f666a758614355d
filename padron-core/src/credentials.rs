//! Stored account credentials and session-token claims.

use serde::{Deserialize, Serialize};

/// Account record used to authenticate a login attempt.
///
/// Owned by the `usuario` table and read-only to this service; rows are
/// provisioned out of band.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Credential {
    pub id_usuario: i64,
    pub correo: String,
    /// Argon2 PHC hash string, selected with an alias from the `contraseña`
    /// column.
    pub password_hash: String,
}

/// Claim set of a session token.
///
/// Self-contained: validity is a function of signature and expiry alone.
/// There is no server-side session record behind it, so a token cannot be
/// revoked before it expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account identifier (`id_usuario`).
    pub sub: i64,
    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Expiry, Unix seconds.
    pub exp: i64,
    /// Token id.
    pub jti: String,
}
