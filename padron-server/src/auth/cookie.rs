//! Session cookie construction and parsing.
//!
//! Built by hand from a directive list; the only variable part is the token
//! itself, which is base64url and always header-safe.

use axum::http::{HeaderMap, HeaderValue, header};

use super::SESSION_COOKIE;

/// `Set-Cookie` value carrying a fresh session token.
///
/// HttpOnly and SameSite=Strict always; `Secure` only outside development so
/// plain-HTTP local clients keep working.
pub fn session_cookie(token: &str, secure: bool) -> Option<HeaderValue> {
    let mut directives = vec![
        format!("{SESSION_COOKIE}={token}"),
        "Path=/".to_string(),
        "HttpOnly".to_string(),
        "SameSite=Strict".to_string(),
    ];
    if secure {
        directives.push("Secure".to_string());
    }

    HeaderValue::from_str(&directives.join("; ")).ok()
}

/// `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static("token=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0")
}

/// Extract the session token from a request's `Cookie` header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| {
            pair.strip_prefix(SESSION_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(str::to_string)
}
