use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::locations::Location;

#[derive(Queryable, Selectable, Identifiable, Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::menu_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub category: String,
}

#[derive(Insertable, Debug, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::menu_items)]
pub struct NewMenuItem {
    pub name: String,
    pub price: f64,
    pub category: String,
}

#[derive(Queryable, Selectable, Identifiable, Clone, Debug, Serialize)]
#[diesel(table_name = crate::db::schema::orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub id: i32,
    pub order_token: String,
    pub user_id: i32,
    pub location: String,
    pub total_price: f64,
    pub estimated_delivery_time: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::db::schema::orders)]
pub struct NewOrder<'a> {
    pub order_token: &'a str,
    pub user_id: i32,
    pub location: &'a str,
    pub total_price: f64,
    pub estimated_delivery_time: i32,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Clone, Debug, PartialEq, Serialize)]
#[diesel(table_name = crate::db::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub position: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::db::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub menu_item_id: i32,
    pub position: i32,
}

/// A validated order waiting to be persisted. The total is not part of the
/// draft: it is priced from the catalog inside the write transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderDraft {
    pub order_token: String,
    pub user_id: i32,
    pub location: Location,
    pub item_ids: Vec<i32>,
    pub estimated_delivery_time: i32,
}
