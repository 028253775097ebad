use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::find_or_404;
use crate::auth::{RequireAdmin, RequireUser};
use crate::database::models::{Keyed, UcsbDiningCommonsMenuItem};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/UCSBDiningCommonsMenuItem/all", get(list_menu_items))
        .route(
            "/api/UCSBDiningCommonsMenuItem",
            get(get_menu_item)
                .put(update_menu_item)
                .delete(delete_menu_item),
        )
        .route("/api/UCSBDiningCommonsMenuItem/post", post(create_menu_item))
}

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateMenuItemParams {
    dining_commons_code: String,
    name: String,
    station: String,
}

/// GET /api/UCSBDiningCommonsMenuItem/all - List all dining commons menu items
async fn list_menu_items(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<UcsbDiningCommonsMenuItem>>, ApiError> {
    let items = state.menu_items.find_all().await?;
    Ok(Json(items))
}

/// GET /api/UCSBDiningCommonsMenuItem?id= - Get a single menu item
async fn get_menu_item(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<UcsbDiningCommonsMenuItem>, ApiError> {
    let item = find_or_404(state.menu_items.as_ref(), &query.id).await?;
    Ok(Json(item))
}

/// POST /api/UCSBDiningCommonsMenuItem/post - Create a new menu item
async fn create_menu_item(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<CreateMenuItemParams>,
) -> Result<Json<UcsbDiningCommonsMenuItem>, ApiError> {
    let item = UcsbDiningCommonsMenuItem {
        id: 0,
        dining_commons_code: params.dining_commons_code,
        name: params.name,
        station: params.station,
    };

    let saved = state.menu_items.save(item).await?;
    Ok(Json(saved))
}

/// PUT /api/UCSBDiningCommonsMenuItem?id= - Replace every field except the key
async fn update_menu_item(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    Json(incoming): Json<UcsbDiningCommonsMenuItem>,
) -> Result<Json<UcsbDiningCommonsMenuItem>, ApiError> {
    let mut item = find_or_404(state.menu_items.as_ref(), &query.id).await?;

    item.dining_commons_code = incoming.dining_commons_code;
    item.name = incoming.name;
    item.station = incoming.station;

    let saved = state.menu_items.save(item).await?;
    Ok(Json(saved))
}

/// DELETE /api/UCSBDiningCommonsMenuItem?id= - Delete a menu item
async fn delete_menu_item(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Value>, ApiError> {
    let item = find_or_404(state.menu_items.as_ref(), &query.id).await?;
    state.menu_items.delete(&item).await?;

    Ok(Json(json!({
        "message": format!(
            "{} with id {} deleted",
            UcsbDiningCommonsMenuItem::NAME,
            query.id
        ),
    })))
}
