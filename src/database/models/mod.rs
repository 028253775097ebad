pub mod menu_item_review;
pub mod recommendation_request;
pub mod ucsb_dining_commons_menu_item;
pub mod ucsb_organization;

pub use menu_item_review::MenuItemReview;
pub use recommendation_request::RecommendationRequest;
pub use ucsb_dining_commons_menu_item::UcsbDiningCommonsMenuItem;
pub use ucsb_organization::UcsbOrganization;

use std::fmt::Display;

/// Key access for persisted entities.
///
/// `NAME` is the display name used in client-facing messages
/// ("MenuItemReview with id 7 not found") and must stay stable.
pub trait Keyed {
    type Key: Clone + Ord + Display + Send + Sync + 'static;

    const NAME: &'static str;

    fn key(&self) -> Self::Key;

    /// True when the store must assign an identity on save. String-keyed
    /// entities always carry a caller-supplied key.
    fn needs_generated_key(&self) -> bool {
        false
    }

    fn set_generated_key(&mut self, _key: i64) {}
}
