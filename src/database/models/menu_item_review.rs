use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Keyed;

/// A student's review of a dining commons menu item.
///
/// `stars` is intentionally unconstrained; the original service never
/// enforced a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default)]
    pub id: i64,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Keyed for MenuItemReview {
    type Key = i64;

    const NAME: &'static str = "MenuItemReview";

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
