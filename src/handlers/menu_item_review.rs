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
use crate::database::models::{Keyed, MenuItemReview};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/menuitemreview/all", get(list_reviews))
        .route(
            "/api/menuitemreview",
            get(get_review).put(update_review).delete(delete_review),
        )
        .route("/api/menuitemreview/post", post(create_review))
}

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateReviewParams {
    item_id: i64,
    reviewer_email: String,
    stars: i32,
    date_reviewed: NaiveDateTime,
    comments: String,
}

/// GET /api/menuitemreview/all - List all menu item reviews
async fn list_reviews(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItemReview>>, ApiError> {
    let reviews = state.reviews.find_all().await?;
    Ok(Json(reviews))
}

/// GET /api/menuitemreview?id= - Get a single review
async fn get_review(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<MenuItemReview>, ApiError> {
    let review = find_or_404(state.reviews.as_ref(), &query.id).await?;
    Ok(Json(review))
}

/// POST /api/menuitemreview/post - Create a new review from query parameters
async fn create_review(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<CreateReviewParams>,
) -> Result<Json<MenuItemReview>, ApiError> {
    tracing::info!("dateReviewed={}", params.date_reviewed);

    let review = MenuItemReview {
        id: 0,
        item_id: params.item_id,
        reviewer_email: params.reviewer_email,
        stars: params.stars,
        date_reviewed: params.date_reviewed,
        comments: params.comments,
    };

    let saved = state.reviews.save(review).await?;
    Ok(Json(saved))
}

/// PUT /api/menuitemreview?id= - Replace every field except the key
async fn update_review(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    Json(incoming): Json<MenuItemReview>,
) -> Result<Json<MenuItemReview>, ApiError> {
    let mut review = find_or_404(state.reviews.as_ref(), &query.id).await?;

    // The body's id, if present, is never applied
    review.item_id = incoming.item_id;
    review.reviewer_email = incoming.reviewer_email;
    review.stars = incoming.stars;
    review.date_reviewed = incoming.date_reviewed;
    review.comments = incoming.comments;

    let saved = state.reviews.save(review).await?;
    Ok(Json(saved))
}

/// DELETE /api/menuitemreview?id= - Delete a review
async fn delete_review(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Value>, ApiError> {
    let review = find_or_404(state.reviews.as_ref(), &query.id).await?;
    state.reviews.delete(&review).await?;

    Ok(Json(json!({
        "message": format!("{} with id {} deleted", MenuItemReview::NAME, query.id),
    })))
}
