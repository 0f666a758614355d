//! Generic CRUD handlers shared by every registry entity.
//!
//! One parameterized component instead of a handler set per table; the
//! router instantiates it per entity (`list_all::<Client>`, ...). Each
//! handler is a straight validate → single query → status/JSON mapping.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use padron_core::{RegistryEntity, RegistryError, registry::EntityDraft};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub async fn list_all<E: RegistryEntity>(State(state): State<AppState>) -> AppResult<Json<Vec<E>>> {
    let rows = state
        .registry::<E>()
        .list_all()
        .await
        .map_err(registry_error::<E>)?;
    Ok(Json(rows))
}

pub async fn create<E: RegistryEntity>(
    State(state): State<AppState>,
    payload: Result<Json<E::Draft>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let draft = match payload {
        Ok(Json(draft)) if draft.is_complete() => draft,
        _ => return Err(AppError::bad_request(E::MSG_MISSING_FIELDS)),
    };

    let id = state
        .registry::<E>()
        .insert(draft)
        .await
        .map_err(registry_error::<E>)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": E::MSG_CREATED, "id": id })),
    ))
}

pub async fn get_by_id<E: RegistryEntity>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<E>> {
    let row = state
        .registry::<E>()
        .find_by_id(id)
        .await
        .map_err(registry_error::<E>)?;
    Ok(Json(row))
}

pub async fn delete_by_id<E: RegistryEntity>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    state
        .registry::<E>()
        .delete_by_id(id)
        .await
        .map_err(registry_error::<E>)?;
    Ok(Json(json!({ "message": E::MSG_DELETED })))
}

/// Maps persistence outcomes onto the entity's wire messages; database
/// detail stays in the server log.
fn registry_error<E: RegistryEntity>(err: RegistryError) -> AppError {
    match err {
        RegistryError::NotFound => AppError::not_found(E::MSG_NOT_FOUND),
        RegistryError::Database(err) => {
            tracing::error!(error = ?err, table = E::TABLE, "database operation failed");
            AppError::internal("Error interno del servidor")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padron_core::{Client, Province};

    #[test]
    fn not_found_maps_to_the_entity_message() {
        let err = registry_error::<Province>(RegistryError::NotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Provincia no encontrada");

        let err = registry_error::<Client>(RegistryError::NotFound);
        assert_eq!(err.message, "Cliente no encontrado");
    }

    #[test]
    fn database_faults_never_leak_detail() {
        let err = registry_error::<Client>(RegistryError::Database(sqlx::Error::PoolClosed));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Error interno del servidor");
    }
}
