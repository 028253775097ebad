use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Keyed;

/// One menu item served at a dining commons station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonsMenuItem {
    #[serde(default)]
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Keyed for UcsbDiningCommonsMenuItem {
    type Key = i64;

    const NAME: &'static str = "UCSBDiningCommonsMenuItem";

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
