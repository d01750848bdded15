#[macro_use]
extern crate log;

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod enums;
pub mod models;
pub mod services;
pub mod test_utils;
pub mod traits;
pub mod views;

use crate::config::AppConfig;
use crate::db::{
    establish_connection_pool, run_db_migrations, DbPool, MenuOperations, OrderOperations,
    RepositoryError, UserOperations,
};
use crate::services::locations::LocationTable;

/// Where the external asset server publishes static files.
#[derive(Clone, Debug)]
pub struct StaticAssets {
    pub url_prefix: String,
}

#[derive(Clone)]
pub struct AppState {
    pub user_ops: UserOperations,
    pub menu_ops: MenuOperations,
    pub order_ops: OrderOperations,
    pub locations: LocationTable,
    pub assets: StaticAssets,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, RepositoryError> {
        let db = establish_connection_pool(
            &config.database_url,
            config.pool_size,
            config.pool_timeout,
        )?;
        run_db_migrations(&db)?;

        Ok(Self::from_pool(db, &config.static_url_prefix))
    }

    pub fn from_pool(db: DbPool, static_url_prefix: &str) -> Self {
        AppState {
            user_ops: UserOperations::new(db.clone()),
            menu_ops: MenuOperations::new(db.clone()),
            order_ops: OrderOperations::new(db),
            locations: LocationTable::campus(),
            assets: StaticAssets {
                url_prefix: static_url_prefix.to_string(),
            },
        }
    }
}
