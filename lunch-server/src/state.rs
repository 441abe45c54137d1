//! Application state shared by every handler

use chrono_tz::Tz;
use shared::error::AppResult;

use crate::config::Config;
use crate::db::DbService;
use crate::services::{RestaurantService, VisitService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Connection pool owner
    pub db: DbService,
    pub restaurants: RestaurantService,
    pub visits: VisitService,
}

impl AppState {
    /// Open the configured database and build the services on top of it
    pub async fn new(config: &Config) -> AppResult<Self> {
        let db = DbService::connect(&config.database).await?;
        Ok(Self::with_db(db, config.timezone))
    }

    pub fn with_db(db: DbService, tz: Tz) -> Self {
        let restaurants = RestaurantService::new(db.pool.clone());
        let visits = VisitService::new(db.pool.clone(), tz);
        Self {
            db,
            restaurants,
            visits,
        }
    }
}
