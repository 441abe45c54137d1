//! Restaurant Repository

use super::{RepoError, RepoResult};
use shared::models::{Restaurant, RestaurantCreate};
use shared::util::now_millis;
use sqlx::AnyPool;

pub async fn find_all(pool: &AnyPool) -> RepoResult<Vec<Restaurant>> {
    let restaurants = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, address, phone, category, latitude, longitude, created_at, updated_at \
         FROM restaurants WHERE deleted_at IS NULL ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(restaurants)
}

pub async fn find_by_id(pool: &AnyPool, id: i64) -> RepoResult<Option<Restaurant>> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, address, phone, category, latitude, longitude, created_at, updated_at \
         FROM restaurants WHERE id = $1 AND deleted_at IS NULL",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(restaurant)
}

pub async fn find_active_by_name_and_address(
    pool: &AnyPool,
    name: &str,
    address: &str,
) -> RepoResult<Option<Restaurant>> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, address, phone, category, latitude, longitude, created_at, updated_at \
         FROM restaurants WHERE name = $1 AND address = $2 AND deleted_at IS NULL LIMIT 1",
    )
    .bind(name)
    .bind(address)
    .fetch_optional(pool)
    .await?;
    Ok(restaurant)
}

pub async fn count(pool: &AnyPool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM restaurants WHERE deleted_at IS NULL",
    )
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// Insert a restaurant as given (validation and defaults are the caller's job)
pub async fn create(pool: &AnyPool, data: &RestaurantCreate) -> RepoResult<Restaurant> {
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO restaurants (name, address, phone, category, latitude, longitude, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
    )
    .bind(data.name.as_str())
    .bind(data.address.as_str())
    .bind(data.phone.as_str())
    .bind(data.category.as_str())
    .bind(data.latitude)
    .bind(data.longitude)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create restaurant".into()))
}

/// Mark a restaurant deleted. Returns false if it was missing or already deleted.
pub async fn soft_delete(pool: &AnyPool, id: i64) -> RepoResult<bool> {
    let now = now_millis();
    let rows = sqlx::query(
        "UPDATE restaurants SET deleted_at = $1, updated_at = $2 WHERE id = $3 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
