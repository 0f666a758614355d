//! Router assembly.

use axum::{
    Json, Router, middleware,
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use padron_core::{City, Client, Department, Province};

use crate::{auth, infra::app_state::AppState, registry};

/// All API routes, mounted under `/api` by [`app_router`].
pub fn api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/clientes",
            get(registry::list_all::<Client>).post(registry::create::<Client>),
        )
        .route(
            "/clientes/{id}",
            get(registry::get_by_id::<Client>).delete(registry::delete_by_id::<Client>),
        )
        .route(
            "/provincia",
            get(registry::list_all::<Province>).post(registry::create::<Province>),
        )
        .route("/provincia/{id}", delete(registry::delete_by_id::<Province>))
        .route(
            "/ciudad",
            get(registry::list_all::<City>).post(registry::create::<City>),
        )
        .route(
            "/departamento",
            get(registry::list_all::<Department>).post(registry::create::<Department>),
        )
        .route("/login", post(auth::handlers::login))
        .route("/logout", post(auth::handlers::logout))
        .route(
            "/sesion",
            get(auth::handlers::current_session)
                .route_layer(middleware::from_fn_with_state(state, auth::require_session)),
        )
}

/// Application router: liveness root, `/api` routes, shared layers.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/api", api_router(state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Servidor corriendo",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
