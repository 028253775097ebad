pub mod menu_item_review;
pub mod recommendation_request;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database;
use crate::database::models::Keyed;
use crate::database::store::EntityStore;
use crate::error::ApiError;
use crate::state::AppState;

/// Assemble the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Resource controllers (role checks inside each handler)
        .merge(menu_item_review::routes())
        .merge(ucsb_dining_commons_menu_item::routes())
        .merge(recommendation_request::routes())
        .merge(ucsb_organization::routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fetch an entity by key or fail with the standard 404 body.
///
/// This is the one lookup-or-fail path every controller shares; the message
/// wording comes from `ApiError::entity_not_found` and is part of the API
/// contract.
pub async fn find_or_404<E>(
    store: &dyn EntityStore<E, E::Key>,
    key: &E::Key,
) -> Result<E, ApiError>
where
    E: Keyed,
{
    store
        .find_by_id(key)
        .await?
        .ok_or_else(|| ApiError::entity_not_found(E::NAME, key))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "UCSB API (Rust)",
        "version": version,
        "description": "Campus CRUD backend built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "menuitemreview": "/api/menuitemreview[/all|/post] (USER read, ADMIN write)",
            "diningcommonsmenuitem": "/api/UCSBDiningCommonsMenuItem[/all|/post] (USER read, ADMIN write)",
            "recommendationrequest": "/api/RecommendationRequest[/all|/post] (USER read, ADMIN write)",
            "organization": "/api/UCSBOrganization[/all|/post] (USER read, ADMIN write)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let database_status = match &state.pool {
        Some(pool) => match database::health_check(pool).await {
            Ok(_) => "ok",
            Err(e) => {
                return (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "status": "degraded",
                        "timestamp": now,
                        "database_error": e.to_string(),
                    })),
                )
            }
        },
        None => "none",
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "timestamp": now,
            "database": database_status,
        })),
    )
}
