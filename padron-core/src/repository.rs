//! PostgreSQL repositories.
//!
//! Queries are built at runtime from the entity descriptors and bound with
//! `.bind(..)`. Table and column names only ever come from `RegistryEntity`
//! constants, never from request input; values always travel as bind
//! parameters.

use std::fmt;
use std::marker::PhantomData;

use sqlx::{PgPool, Row};
use tracing::debug;

use crate::credentials::Credential;
use crate::error::{RegistryError, Result};
use crate::registry::{EntityDraft, RegistryEntity};

/// Generic single-table repository for registry entities.
#[derive(Clone)]
pub struct RegistryRepository<E: RegistryEntity> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: RegistryEntity> RegistryRepository<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<E>> {
        let rows = sqlx::query_as::<_, E>(&select_sql::<E>())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Single parameterized insert; returns the stored row id.
    pub async fn insert(&self, draft: E::Draft) -> Result<i64> {
        let sql = insert_sql::<E>();
        let row = draft.bind_insert(sqlx::query(&sql)).fetch_one(&self.pool).await?;
        let id: i64 = row.try_get(0)?;
        debug!(table = E::TABLE, id, "row inserted");
        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<E> {
        sqlx::query_as::<_, E>(&select_by_id_sql::<E>())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RegistryError::NotFound)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        let result = sqlx::query(&delete_sql::<E>())
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound);
        }
        debug!(table = E::TABLE, id, "row deleted");
        Ok(())
    }
}

impl<E: RegistryEntity> fmt::Debug for RegistryRepository<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryRepository")
            .field("table", &E::TABLE)
            .finish_non_exhaustive()
    }
}

fn select_sql<E: RegistryEntity>() -> String {
    format!("SELECT {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
}

fn select_by_id_sql<E: RegistryEntity>() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        E::COLUMNS.join(", "),
        E::TABLE,
        E::ID_COLUMN
    )
}

fn insert_sql<E: RegistryEntity>() -> String {
    let placeholders = (1..=E::INSERT_COLUMNS.len())
        .map(|n| format!("${n}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        E::TABLE,
        E::INSERT_COLUMNS.join(", "),
        placeholders,
        E::ID_COLUMN
    )
}

fn delete_sql<E: RegistryEntity>() -> String {
    format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::ID_COLUMN)
}

/// Read-only lookup against the `usuario` credential table.
#[derive(Clone)]
pub struct CredentialsRepository {
    pool: PgPool,
}

impl CredentialsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Stored credential for a login attempt, or `None` when the address is
    /// unknown.
    pub async fn find_by_correo(&self, correo: &str) -> Result<Option<Credential>> {
        let credential = sqlx::query_as::<_, Credential>(
            "SELECT id_usuario, correo, contraseña AS password_hash \
             FROM usuario WHERE correo = $1",
        )
        .bind(correo)
        .fetch_optional(&self.pool)
        .await?;
        Ok(credential)
    }
}

impl fmt::Debug for CredentialsRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsRepository").finish_non_exhaustive()
    }
}
