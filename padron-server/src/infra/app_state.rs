//! Shared per-process state injected into handlers.

use std::{fmt, sync::Arc};

use sqlx::PgPool;

use padron_core::{CredentialsRepository, RegistryEntity, RegistryRepository};

use crate::auth::jwt::TokenKeys;
use crate::infra::config::Config;

/// Process-wide immutable state: configuration, signing keys, and the
/// connection pool. Cheap to clone; nothing here is mutated after startup,
/// so requests share it without synchronization.
#[derive(Clone)]
pub struct AppState {
    pool: PgPool,
    config: Arc<Config>,
    token_keys: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(pool: PgPool, config: Arc<Config>) -> Self {
        let token_keys = Arc::new(TokenKeys::new(&config.auth.jwt_secret));
        Self {
            pool,
            config,
            token_keys,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn token_keys(&self) -> &TokenKeys {
        &self.token_keys
    }

    pub fn registry<E: RegistryEntity>(&self) -> RegistryRepository<E> {
        RegistryRepository::new(self.pool.clone())
    }

    pub fn credentials(&self) -> CredentialsRepository {
        CredentialsRepository::new(self.pool.clone())
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
