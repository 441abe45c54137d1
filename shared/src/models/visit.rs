//! Visit Model

use serde::{Deserialize, Serialize};

/// Name shown for a visit whose restaurant has been deleted
pub const DELETED_RESTAURANT_NAME: &str = "삭제된 맛집";

/// Address shown for a visit whose restaurant has been deleted
pub const NO_ADDRESS_INFO: &str = "주소 정보 없음";

/// Visit row as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "PascalCase")]
pub struct Visit {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "RestaurantID")]
    pub restaurant_id: i64,
    /// Visit instant, Unix millis
    pub visit_date: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Record-a-visit payload: `{"RestaurantID": 1, "VisitDate": "2024-01-01T10:00:00Z"}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitCreate {
    #[serde(rename = "RestaurantID", default)]
    pub restaurant_id: Option<i64>,
    #[serde(rename = "VisitDate", default)]
    pub visit_date: Option<String>,
}

/// Update-visit payload: `{"VisitDate": "..."}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitUpdate {
    #[serde(rename = "VisitDate", default)]
    pub visit_date: Option<String>,
}

/// Display-ready projection of a visit joined with its restaurant
///
/// `restaurant_name` and `restaurant_address` are never empty for a deleted
/// restaurant: placeholders are substituted and `is_deleted` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitView {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "RestaurantID")]
    pub restaurant_id: i64,
    #[serde(rename = "restaurantName")]
    pub restaurant_name: String,
    #[serde(rename = "restaurantAddress")]
    pub restaurant_address: String,
    /// `YYYY-MM-DD` in the display timezone
    pub date: String,
    /// `HH:MM` in the display timezone
    pub time: String,
    #[serde(rename = "isDeleted")]
    pub is_deleted: bool,
}

/// Update response: the refreshed view plus a confirmation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitUpdated {
    #[serde(flatten)]
    pub visit: VisitView,
    pub message: String,
}
