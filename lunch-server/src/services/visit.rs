//! Visit Service
//!
//! A visit moves `Created → Updated* → Deleted`. Restaurant existence is
//! checked once, when the visit is recorded; afterwards the restaurant may be
//! deleted at any time, and every read resolves the reference again:
//!
//! - restaurant still active: its name and address are shown
//! - restaurant gone: fixed placeholders are shown and `isDeleted` is set
//!
//! Visit dates are normalized into the display timezone on write and
//! formatted in the same timezone on read.

use chrono_tz::Tz;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    DELETED_RESTAURANT_NAME, MessageResponse, NO_ADDRESS_INFO, VisitCreate, VisitUpdate,
    VisitUpdated, VisitView,
};
use sqlx::AnyPool;

use crate::db::repository::visit::JoinedVisit;
use crate::db::repository::{RepoError, restaurant, visit};
use crate::utils::time;

pub const RESTAURANT_ID_REQUIRED: &str = "RestaurantID is required";
pub const VISIT_DATE_REQUIRED: &str = "VisitDate is required";
pub const VISIT_UPDATED: &str = "Visit record updated successfully";
pub const VISIT_DELETED: &str = "Visit record deleted successfully";

/// Restaurant side of a visit after read-time resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantRef {
    Active { name: String, address: String },
    Deleted,
}

impl RestaurantRef {
    /// Resolve the joined columns; an absent or zero id means the restaurant is gone
    pub fn resolve(row: &JoinedVisit) -> Self {
        match row.joined_restaurant_id {
            Some(id) if id != 0 => Self::Active {
                name: row.restaurant_name.clone().unwrap_or_default(),
                address: row.restaurant_address.clone().unwrap_or_default(),
            },
            _ => Self::Deleted,
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Display name and address, with placeholders for a deleted restaurant
    pub fn display(self) -> (String, String) {
        match self {
            Self::Active { name, address } => (name, address),
            Self::Deleted => (
                DELETED_RESTAURANT_NAME.to_string(),
                NO_ADDRESS_INFO.to_string(),
            ),
        }
    }
}

/// Build the display view of a joined visit row
pub fn project(row: JoinedVisit, tz: Tz) -> VisitView {
    let restaurant = RestaurantRef::resolve(&row);
    let is_deleted = restaurant.is_deleted();
    let (restaurant_name, restaurant_address) = restaurant.display();

    VisitView {
        id: row.id,
        restaurant_id: row.restaurant_id,
        restaurant_name,
        restaurant_address,
        date: time::format_date(row.visit_date, tz),
        time: time::format_time(row.visit_date, tz),
        is_deleted,
    }
}

#[derive(Clone)]
pub struct VisitService {
    pool: AnyPool,
    tz: Tz,
}

impl VisitService {
    pub fn new(pool: AnyPool, tz: Tz) -> Self {
        Self { pool, tz }
    }

    /// Record a visit to an existing, non-deleted restaurant
    pub async fn create_visit(&self, input: VisitCreate) -> AppResult<VisitView> {
        let restaurant_id = input
            .restaurant_id
            .filter(|id| *id > 0)
            .ok_or_else(|| AppError::validation(RESTAURANT_ID_REQUIRED))?;
        let visit_date = required_visit_date(input.visit_date.as_deref())?;

        if restaurant::find_by_id(&self.pool, restaurant_id)
            .await?
            .is_none()
        {
            return Err(AppError::new(ErrorCode::RestaurantNotFound));
        }

        let local = time::normalize(visit_date, self.tz);
        let id = visit::create(&self.pool, restaurant_id, local.timestamp_millis()).await?;
        tracing::info!(id, restaurant_id, visit_date = %local, "Visit recorded");

        let row = visit::find_joined_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Visit {id} missing after insert")))?;
        Ok(project(row, self.tz))
    }

    /// All visits, most recent first
    pub async fn list_all_visits(&self) -> AppResult<Vec<VisitView>> {
        let rows = visit::find_all_joined(&self.pool).await?;
        Ok(rows.into_iter().map(|row| project(row, self.tz)).collect())
    }

    /// Move a visit to a new date
    pub async fn update_visit(&self, id: i64, input: VisitUpdate) -> AppResult<VisitUpdated> {
        let visit_date = required_visit_date(input.visit_date.as_deref())?;

        if visit::find_by_id(&self.pool, id).await?.is_none() {
            return Err(AppError::new(ErrorCode::VisitNotFound));
        }

        let local = time::normalize(visit_date, self.tz);
        match visit::update_visit_date(&self.pool, id, local.timestamp_millis()).await {
            Ok(()) => {}
            Err(RepoError::NotFound(_)) => return Err(AppError::new(ErrorCode::VisitNotFound)),
            Err(e) => return Err(e.into()),
        }
        tracing::info!(id, visit_date = %local, "Visit updated");

        Ok(VisitUpdated {
            visit: self.load_view(id).await?,
            message: VISIT_UPDATED.to_string(),
        })
    }

    /// Soft-delete a visit. Deleting a missing or already-deleted visit succeeds.
    pub async fn delete_visit(&self, id: i64) -> AppResult<MessageResponse> {
        if visit::soft_delete(&self.pool, id).await? {
            tracing::info!(id, "Visit deleted");
        } else {
            tracing::debug!(id, "Visit already absent, nothing to delete");
        }
        Ok(MessageResponse::new(VISIT_DELETED))
    }

    async fn load_view(&self, id: i64) -> AppResult<VisitView> {
        let row = visit::find_joined_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::VisitNotFound))?;
        Ok(project(row, self.tz))
    }
}

fn required_visit_date(raw: Option<&str>) -> AppResult<chrono::DateTime<chrono::FixedOffset>> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => time::parse_visit_date(raw),
        _ => Err(AppError::validation(VISIT_DATE_REQUIRED)),
    }
}
