use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Keyed;

/// A request for a letter of recommendation.
///
/// No ordering is enforced between `date_requested` and `date_needed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Keyed for RecommendationRequest {
    type Key = i64;

    const NAME: &'static str = "RecommendationRequest";

    fn key(&self) -> i64 {
        self.id
    }

    fn needs_generated_key(&self) -> bool {
        self.id == 0
    }

    fn set_generated_key(&mut self, key: i64) {
        self.id = key;
    }
}
