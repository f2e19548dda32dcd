//! Routers: the seller resource under `/api/v1/seller`, plus service health.

use crate::handlers::sellers::{
    create_seller, delete_seller, get_all_sellers, get_seller, update_seller,
};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

/// The five seller operations. The collection URL ends in `/` (create +
/// list live there) and the router matches trailing slashes literally, so
/// the paths are spelled out in full instead of nested under a prefix; a
/// nested `/` route flattens to the bare prefix and the `/` form would 404.
pub fn seller_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/seller/", get(get_all_sellers).post(create_seller))
        .route(
            "/api/v1/seller/:seller_id",
            get(get_seller).put(update_seller).delete(delete_seller),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, StatusCode> {
    if sqlx::query("SELECT 1")
        .fetch_optional(&state.pool)
        .await
        .is_err()
    {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    Ok(Json(serde_json::json!({ "status": "ok", "database": "ok" })))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health (liveness + store ping) and GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .with_state(state)
}

/// The full application: health/version at the root, sellers under
/// `/api/v1/seller`, request tracing over everything.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(seller_routes(state))
        .layer(TraceLayer::new_for_http())
}
