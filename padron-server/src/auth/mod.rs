//! Cookie/token authentication for the registry API.
//!
//! Login verifies the stored argon2 hash, signs a two-hour HS256 token, and
//! hands it to the client both in the body and in an HTTP-only cookie. The
//! token is self-contained: verification needs no lookup, and logout only
//! clears the cookie.

pub mod cookie;
pub mod handlers;
pub mod jwt;
pub mod middleware;

pub use middleware::{SessionIdentity, require_session};

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";
