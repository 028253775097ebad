use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Keyed;

/// A registered student organization, keyed by its caller-supplied org code.
/// The code is immutable once created: update targets the same key row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    #[serde(default)]
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Keyed for UcsbOrganization {
    type Key = String;

    const NAME: &'static str = "UCSBOrganization";

    fn key(&self) -> String {
        self.org_code.clone()
    }
}
