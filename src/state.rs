use std::sync::Arc;

use sqlx::PgPool;

use crate::database::models::{
    MenuItemReview, RecommendationRequest, UcsbDiningCommonsMenuItem, UcsbOrganization,
};
use crate::database::postgres::{
    PgDiningCommonsMenuItemStore, PgMenuItemReviewStore, PgOrganizationStore,
    PgRecommendationRequestStore,
};
use crate::database::store::EntityStore;

/// Shared application state: one store handle per resource family, plus the
/// raw pool for the health endpoint (absent when running against the
/// in-memory stores).
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<dyn EntityStore<MenuItemReview, i64>>,
    pub menu_items: Arc<dyn EntityStore<UcsbDiningCommonsMenuItem, i64>>,
    pub recommendation_requests: Arc<dyn EntityStore<RecommendationRequest, i64>>,
    pub organizations: Arc<dyn EntityStore<UcsbOrganization, String>>,
    pub pool: Option<PgPool>,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            reviews: Arc::new(PgMenuItemReviewStore::new(pool.clone())),
            menu_items: Arc::new(PgDiningCommonsMenuItemStore::new(pool.clone())),
            recommendation_requests: Arc::new(PgRecommendationRequestStore::new(pool.clone())),
            organizations: Arc::new(PgOrganizationStore::new(pool.clone())),
            pool: Some(pool),
        }
    }
}
