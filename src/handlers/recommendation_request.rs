use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::{json, Value};

use super::find_or_404;
use crate::auth::{RequireAdmin, RequireUser};
use crate::database::models::{Keyed, RecommendationRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/RecommendationRequest/all", get(list_requests))
        .route(
            "/api/RecommendationRequest",
            get(get_request).put(update_request).delete(delete_request),
        )
        .route("/api/RecommendationRequest/post", post(create_request))
}

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRequestParams {
    requester_email: String,
    professor_email: String,
    explanation: String,
    date_requested: NaiveDateTime,
    date_needed: NaiveDateTime,
    done: bool,
}

/// GET /api/RecommendationRequest/all - List all recommendation requests
async fn list_requests(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<RecommendationRequest>>, ApiError> {
    let requests = state.recommendation_requests.find_all().await?;
    Ok(Json(requests))
}

/// GET /api/RecommendationRequest?id= - Get a single recommendation request
async fn get_request(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<RecommendationRequest>, ApiError> {
    let request = find_or_404(state.recommendation_requests.as_ref(), &query.id).await?;
    Ok(Json(request))
}

/// POST /api/RecommendationRequest/post - Create a new recommendation request.
///
/// `dateNeeded` before `dateRequested` is accepted; the ordering was never
/// validated in the original service.
async fn create_request(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<CreateRequestParams>,
) -> Result<Json<RecommendationRequest>, ApiError> {
    let request = RecommendationRequest {
        id: 0,
        requester_email: params.requester_email,
        professor_email: params.professor_email,
        explanation: params.explanation,
        date_requested: params.date_requested,
        date_needed: params.date_needed,
        done: params.done,
    };

    let saved = state.recommendation_requests.save(request).await?;
    Ok(Json(saved))
}

/// PUT /api/RecommendationRequest?id= - Replace every field except the key
async fn update_request(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    Json(incoming): Json<RecommendationRequest>,
) -> Result<Json<RecommendationRequest>, ApiError> {
    let mut request = find_or_404(state.recommendation_requests.as_ref(), &query.id).await?;

    request.requester_email = incoming.requester_email;
    request.professor_email = incoming.professor_email;
    request.explanation = incoming.explanation;
    request.date_requested = incoming.date_requested;
    request.date_needed = incoming.date_needed;
    request.done = incoming.done;

    let saved = state.recommendation_requests.save(request).await?;
    Ok(Json(saved))
}

/// DELETE /api/RecommendationRequest?id= - Delete a recommendation request
async fn delete_request(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Value>, ApiError> {
    let request = find_or_404(state.recommendation_requests.as_ref(), &query.id).await?;
    state.recommendation_requests.delete(&request).await?;

    Ok(Json(json!({
        "message": format!(
            "{} with id {} deleted",
            RecommendationRequest::NAME,
            query.id
        ),
    })))
}
