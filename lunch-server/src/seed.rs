//! Sample data for a fresh store

use shared::models::RestaurantCreate;
use sqlx::AnyPool;

use crate::db::repository::{RepoResult, restaurant};

fn sample(
    name: &str,
    address: &str,
    phone: &str,
    category: &str,
    latitude: f64,
    longitude: f64,
) -> RestaurantCreate {
    RestaurantCreate {
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        category: category.to_string(),
        latitude,
        longitude,
    }
}

fn sample_restaurants() -> Vec<RestaurantCreate> {
    vec![
        sample("고향집", "서울시 강남구", "02-123-4567", "한식", 37.4979, 127.0276),
        sample("차이나오", "서울시 서초구", "02-987-6543", "중식", 37.4836, 127.0325),
        sample("스시하나", "서울시 종로구", "02-456-7890", "일식", 37.5729, 126.9794),
    ]
}

/// Insert the sample restaurants when no active restaurant exists.
///
/// Returns how many rows were inserted (0 when the store already had data).
pub async fn insert_sample_data(pool: &AnyPool) -> RepoResult<usize> {
    if restaurant::count(pool).await? > 0 {
        tracing::debug!("Restaurants already present, skipping sample data");
        return Ok(0);
    }

    let samples = sample_restaurants();
    for data in &samples {
        restaurant::create(pool, data).await?;
    }
    tracing::info!(count = samples.len(), "Sample restaurants inserted");
    Ok(samples.len())
}
