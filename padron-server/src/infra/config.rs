//! Environment-sourced runtime configuration.
//!
//! Loaded once in `main` (after the optional `.env` file) and injected into
//! handlers through `AppState`; nothing reads the environment after startup.

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, bail};
use sqlx::postgres::PgConnectOptions;

/// Runtime mode. Gates the `Secure` attribute on the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => bail!("unrecognized APP_ENV value: {other}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Upper bound on the connection pool.
    pub max_connections: u32,
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

#[derive(Clone)]
pub struct AuthSettings {
    /// Process-wide token signing secret.
    pub jwt_secret: String,
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub environment: Environment,
}

impl Config {
    /// Read the full configuration from the process environment.
    ///
    /// Everything except `JWT_SECRET` has a development default.
    pub fn from_env() -> anyhow::Result<Self> {
        let server = ServerSettings {
            host: env_or("SERVER_HOST", "0.0.0.0"),
            port: parsed_env("SERVER_PORT", 4400)?,
        };

        let database = DatabaseSettings {
            host: env_or("DATABASE_HOST", "localhost"),
            port: parsed_env("DATABASE_PORT", 5432)?,
            user: env_or("DATABASE_USER", "postgres"),
            password: env::var("DATABASE_PASSWORD").unwrap_or_default(),
            name: env_or("DATABASE_NAME", "padron"),
            max_connections: parsed_env("DATABASE_MAX_CONNECTIONS", 10)?,
        };

        let auth = AuthSettings {
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
        };

        let environment = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Development,
        };

        Ok(Self {
            server,
            database,
            auth,
            environment,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_env<T: FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("invalid {key} value: {value}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    /// Scoped environment override; restores the prior value on drop.
    struct EnvVarGuard {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarGuard {
        fn unset(key: &'static str) -> Self {
            let previous = std::env::var_os(key);
            // SAFETY: each test touches its own variable and drop restores it.
            unsafe {
                std::env::remove_var(key);
            }
            Self { key, previous }
        }

        fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
            let previous = std::env::var_os(key);
            // SAFETY: each test touches its own variable and drop restores it.
            unsafe {
                std::env::set_var(key, value);
            }
            Self { key, previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            // SAFETY: reinstates whatever was set before the guard.
            unsafe {
                match &self.previous {
                    Some(prev) => std::env::set_var(self.key, prev),
                    None => std::env::remove_var(self.key),
                }
            }
        }
    }

    #[test]
    fn environment_parses_both_modes() {
        assert!(!"development".parse::<Environment>().unwrap().is_production());
        assert!("production".parse::<Environment>().unwrap().is_production());
        assert!("PROD".parse::<Environment>().unwrap().is_production());
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn parsed_env_falls_back_and_rejects_garbage() {
        let _clear = EnvVarGuard::unset("PADRON_TEST_PORT");
        assert_eq!(parsed_env("PADRON_TEST_PORT", 4400u16).unwrap(), 4400);

        let _scope = EnvVarGuard::set("PADRON_TEST_PORT", "9090");
        assert_eq!(parsed_env("PADRON_TEST_PORT", 4400u16).unwrap(), 9090);

        let _bad = EnvVarGuard::set("PADRON_TEST_PORT", "not-a-port");
        assert!(parsed_env("PADRON_TEST_PORT", 4400u16).is_err());
    }

    #[test]
    fn connect_options_use_configured_database() {
        let settings = DatabaseSettings {
            host: "db.internal".to_string(),
            port: 5433,
            user: "registry".to_string(),
            password: "secret".to_string(),
            name: "padron".to_string(),
            max_connections: 10,
        };
        let options = settings.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("padron"));
    }

    #[test]
    fn auth_settings_debug_never_prints_the_secret() {
        let auth = AuthSettings {
            jwt_secret: "super-secret".to_string(),
        };
        let rendered = format!("{auth:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
