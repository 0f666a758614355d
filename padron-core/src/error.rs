use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A point lookup or delete matched zero rows.
    #[error("no matching row")]
    NotFound,

    /// Any fault reported by the database driver.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
