use crate::db::errors::RepositoryError;
use crate::db::schema::menu_items::dsl::*;
use crate::db::{DbConnection, DbPool};
use crate::models::common::MenuItem;
use diesel::prelude::*;
use log::error;

#[derive(Clone)]
pub struct MenuOperations {
    pool: DbPool,
}

impl MenuOperations {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Full catalog, grouped by category.
    pub fn get_all_menu_items(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("get_all_menu_items: failed to acquire DB connection: {}", e);
            e
        })?;

        menu_items
            .order((category.asc(), name.asc(), id.asc()))
            .select(MenuItem::as_select())
            .load::<MenuItem>(conn.connection())
            .map_err(|e| {
                error!("get_all_menu_items: error loading menu items: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }
}
