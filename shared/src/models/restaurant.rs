//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Category assigned when the client leaves it empty
pub const DEFAULT_CATEGORY: &str = "음식점";

/// Phone marker assigned when the client leaves it empty
pub const NO_PHONE: &str = "전화번호 없음";

/// Restaurant entity (active rows only; soft-deleted rows are never serialized)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "PascalCase")]
pub struct Restaurant {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create restaurant payload
///
/// Every field is optional on the wire; missing values arrive as empty
/// strings or `0.0` and are checked by the restaurant service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RestaurantCreate {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl RestaurantCreate {
    /// Whether the location is the `(0, 0)` "missing" sentinel
    pub fn has_location(&self) -> bool {
        !(self.latitude == 0.0 && self.longitude == 0.0)
    }

    /// Fill in the default category and phone marker for blank fields
    pub fn with_defaults(mut self) -> Self {
        if self.category.trim().is_empty() {
            self.category = DEFAULT_CATEGORY.to_string();
        }
        if self.phone.trim().is_empty() {
            self.phone = NO_PHONE.to_string();
        }
        self
    }
}
