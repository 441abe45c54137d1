//! Restaurant Service
//!
//! Validate-and-create, lookup, listing and soft delete. Deleting a
//! restaurant leaves its visits untouched; they resolve to a placeholder at
//! read time (see [`super::visit`]).

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MessageResponse, Restaurant, RestaurantCreate};
use sqlx::AnyPool;

use crate::db::repository::{RepoError, restaurant};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_max_len, validate_required_text,
};

pub const NAME_REQUIRED: &str = "맛집 이름은 필수입니다";
pub const ADDRESS_REQUIRED: &str = "맛집 주소는 필수입니다";
pub const LOCATION_REQUIRED: &str = "맛집 위치 정보는 필수입니다";
pub const RESTAURANT_DELETED: &str = "Restaurant deleted successfully";

#[derive(Clone)]
pub struct RestaurantService {
    pool: AnyPool,
}

impl RestaurantService {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// All non-deleted restaurants
    pub async fn list_all(&self) -> AppResult<Vec<Restaurant>> {
        Ok(restaurant::find_all(&self.pool).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Restaurant> {
        restaurant::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))
    }

    /// Validate, apply defaults, reject duplicates, persist
    pub async fn create(&self, input: RestaurantCreate) -> AppResult<Restaurant> {
        validate_create(&input)?;
        let data = input.with_defaults();

        if restaurant::find_active_by_name_and_address(&self.pool, &data.name, &data.address)
            .await?
            .is_some()
        {
            return Err(AppError::new(ErrorCode::RestaurantAlreadyExists));
        }

        let created = match restaurant::create(&self.pool, &data).await {
            Ok(r) => r,
            // Lost a race with a concurrent insert of the same restaurant
            Err(RepoError::Duplicate(_)) => {
                return Err(AppError::new(ErrorCode::RestaurantAlreadyExists));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(id = created.id, name = %created.name, "Restaurant created");
        Ok(created)
    }

    /// Soft-delete; visits referencing the restaurant are kept
    pub async fn delete(&self, id: i64) -> AppResult<MessageResponse> {
        let existing = self.get_by_id(id).await?;

        if !restaurant::soft_delete(&self.pool, id).await? {
            // Deleted by someone else between lookup and update
            return Err(AppError::new(ErrorCode::RestaurantNotFound));
        }

        tracing::info!(id, name = %existing.name, "Restaurant deleted");
        Ok(MessageResponse::new(RESTAURANT_DELETED))
    }
}

/// Field checks in the order clients see them: name, address, location
pub fn validate_create(input: &RestaurantCreate) -> AppResult<()> {
    validate_required_text(&input.name, NAME_REQUIRED, "Name", MAX_NAME_LEN)?;
    validate_required_text(&input.address, ADDRESS_REQUIRED, "Address", MAX_ADDRESS_LEN)?;
    if !input.has_location() {
        return Err(AppError::validation(LOCATION_REQUIRED));
    }
    validate_max_len(&input.phone, "Phone", MAX_SHORT_TEXT_LEN)?;
    validate_max_len(&input.category, "Category", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RestaurantCreate {
        RestaurantCreate {
            name: "테스트 맛집".into(),
            address: "서울시 강남구 테스트동".into(),
            latitude: 37.5665,
            longitude: 126.9780,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_create(&valid()).is_ok());
    }

    #[test]
    fn test_missing_name() {
        let input = RestaurantCreate {
            name: String::new(),
            ..valid()
        };
        assert_eq!(validate_create(&input).unwrap_err().message, NAME_REQUIRED);
    }

    #[test]
    fn test_missing_address() {
        let input = RestaurantCreate {
            address: String::new(),
            ..valid()
        };
        assert_eq!(validate_create(&input).unwrap_err().message, ADDRESS_REQUIRED);
    }

    #[test]
    fn test_missing_location() {
        let input = RestaurantCreate {
            latitude: 0.0,
            longitude: 0.0,
            ..valid()
        };
        assert_eq!(validate_create(&input).unwrap_err().message, LOCATION_REQUIRED);
    }

    #[test]
    fn test_one_zero_coordinate_is_enough() {
        let input = RestaurantCreate {
            latitude: 1.0,
            longitude: 0.0,
            ..valid()
        };
        assert!(validate_create(&input).is_ok());
    }

    #[test]
    fn test_name_checked_before_address() {
        let input = RestaurantCreate::default();
        assert_eq!(validate_create(&input).unwrap_err().message, NAME_REQUIRED);
    }
}
