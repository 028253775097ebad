use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::find_or_404;
use crate::auth::{RequireAdmin, RequireUser};
use crate::database::models::{Keyed, UcsbOrganization};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/UCSBOrganization/all", get(list_organizations))
        .route(
            "/api/UCSBOrganization",
            get(get_organization)
                .put(update_organization)
                .delete(delete_organization),
        )
        .route("/api/UCSBOrganization/post", post(create_organization))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrgCodeQuery {
    org_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrganizationParams {
    org_code: String,
    org_translation_short: String,
    org_translation: String,
    inactive: bool,
}

/// GET /api/UCSBOrganization/all - List all organizations
async fn list_organizations(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<UcsbOrganization>>, ApiError> {
    let organizations = state.organizations.find_all().await?;
    Ok(Json(organizations))
}

/// GET /api/UCSBOrganization?orgCode= - Get a single organization
async fn get_organization(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    Query(query): Query<OrgCodeQuery>,
) -> Result<Json<UcsbOrganization>, ApiError> {
    let organization = find_or_404(state.organizations.as_ref(), &query.org_code).await?;
    Ok(Json(organization))
}

/// POST /api/UCSBOrganization/post - Create a new organization.
///
/// Unlike the other families the caller supplies the key.
async fn create_organization(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<CreateOrganizationParams>,
) -> Result<Json<UcsbOrganization>, ApiError> {
    let organization = UcsbOrganization {
        org_code: params.org_code,
        org_translation_short: params.org_translation_short,
        org_translation: params.org_translation,
        inactive: params.inactive,
    };

    let saved = state.organizations.save(organization).await?;
    Ok(Json(saved))
}

/// PUT /api/UCSBOrganization?orgCode= - Replace every field except the key
async fn update_organization(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<OrgCodeQuery>,
    Json(incoming): Json<UcsbOrganization>,
) -> Result<Json<UcsbOrganization>, ApiError> {
    let mut organization = find_or_404(state.organizations.as_ref(), &query.org_code).await?;

    // orgCode is immutable: the looked-up row's code is retained even when
    // the body carries a different one
    organization.org_translation_short = incoming.org_translation_short;
    organization.org_translation = incoming.org_translation;
    organization.inactive = incoming.inactive;

    let saved = state.organizations.save(organization).await?;
    Ok(Json(saved))
}

/// DELETE /api/UCSBOrganization?orgCode= - Delete an organization
async fn delete_organization(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<OrgCodeQuery>,
) -> Result<Json<Value>, ApiError> {
    let organization = find_or_404(state.organizations.as_ref(), &query.org_code).await?;
    state.organizations.delete(&organization).await?;

    Ok(Json(json!({
        "message": format!(
            "{} with id {} deleted",
            UcsbOrganization::NAME,
            query.org_code
        ),
    })))
}
