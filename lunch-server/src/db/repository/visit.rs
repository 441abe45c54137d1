//! Visit Repository
//!
//! Joined reads go through a LEFT JOIN that only matches active restaurants,
//! so a visit whose restaurant was soft-deleted comes back with NULL
//! restaurant columns instead of disappearing.

use super::{RepoError, RepoResult};
use shared::models::Visit;
use shared::util::now_millis;
use sqlx::AnyPool;

/// Visit row joined with its (possibly deleted) restaurant
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct JoinedVisit {
    pub id: i64,
    pub restaurant_id: i64,
    pub visit_date: i64,
    /// NULL when the restaurant is missing or soft-deleted
    pub joined_restaurant_id: Option<i64>,
    pub restaurant_name: Option<String>,
    pub restaurant_address: Option<String>,
}

const JOINED_SELECT: &str = "\
    SELECT v.id, v.restaurant_id, v.visit_date, \
           r.id AS joined_restaurant_id, \
           r.name AS restaurant_name, \
           r.address AS restaurant_address \
    FROM visits v \
    LEFT JOIN restaurants r ON r.id = v.restaurant_id AND r.deleted_at IS NULL \
    WHERE v.deleted_at IS NULL";

pub async fn find_by_id(pool: &AnyPool, id: i64) -> RepoResult<Option<Visit>> {
    let visit = sqlx::query_as::<_, Visit>(
        "SELECT id, restaurant_id, visit_date, created_at, updated_at \
         FROM visits WHERE id = $1 AND deleted_at IS NULL",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(visit)
}

/// All active visits, most recent first; ties keep insertion order
pub async fn find_all_joined(pool: &AnyPool) -> RepoResult<Vec<JoinedVisit>> {
    let sql = format!("{JOINED_SELECT} ORDER BY v.visit_date DESC, v.id ASC");
    let visits = sqlx::query_as::<_, JoinedVisit>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(visits)
}

pub async fn find_joined_by_id(pool: &AnyPool, id: i64) -> RepoResult<Option<JoinedVisit>> {
    let sql = format!("{JOINED_SELECT} AND v.id = $1");
    let visit = sqlx::query_as::<_, JoinedVisit>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(visit)
}

/// Insert a visit and return its id
pub async fn create(pool: &AnyPool, restaurant_id: i64, visit_date: i64) -> RepoResult<i64> {
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO visits (restaurant_id, visit_date, created_at, updated_at) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(restaurant_id)
    .bind(visit_date)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update_visit_date(pool: &AnyPool, id: i64, visit_date: i64) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE visits SET visit_date = $1, updated_at = $2 WHERE id = $3 AND deleted_at IS NULL",
    )
    .bind(visit_date)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Visit {id} not found")));
    }
    Ok(())
}

/// Mark a visit deleted. Returns false if it was missing or already deleted.
pub async fn soft_delete(pool: &AnyPool, id: i64) -> RepoResult<bool> {
    let now = now_millis();
    let rows = sqlx::query(
        "UPDATE visits SET deleted_at = $1, updated_at = $2 WHERE id = $3 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
