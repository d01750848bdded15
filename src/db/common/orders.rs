use crate::db::{DbConnection, DbPool, RepositoryError};
use crate::models::cart::{to_decimal, to_f64};
use crate::models::common::{NewOrder, NewOrderItem, Order, OrderDraft, OrderItem};
use crate::traits::OrderStore;
use diesel::prelude::*;
use diesel::result::Error;
use diesel::PgConnection;
use log::{debug, error};
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};

#[derive(Clone)]
pub struct OrderOperations {
    pool: DbPool,
}

impl OrderOperations {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Prices the draft against the catalog and writes the order row and its
    /// line items in one transaction.
    pub fn create_order(&self, draft: &OrderDraft) -> Result<Order, RepositoryError> {
        if draft.item_ids.is_empty() {
            return Err(RepositoryError::ValidationError(format!(
                "Order is empty for user: {}",
                draft.user_id
            )));
        }

        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("create_order: failed to acquire DB connection: {}", e);
            e
        })?;

        conn.connection()
            .transaction::<Order, RepositoryError, _>(|conn| {
                let total = Self::price_items(conn, &draft.item_ids)?;

                let order = {
                    use crate::db::schema::orders::dsl::*;
                    diesel::insert_into(orders)
                        .values(&NewOrder {
                            order_token: &draft.order_token,
                            user_id: draft.user_id,
                            location: draft.location.human_readable(),
                            total_price: to_f64(total),
                            estimated_delivery_time: draft.estimated_delivery_time,
                        })
                        .returning(Order::as_returning())
                        .get_result::<Order>(conn)
                        .map_err(|e| {
                            error!(
                                "create_order: error inserting order {} for user {}: {}",
                                draft.order_token, draft.user_id, e
                            );
                            RepositoryError::DatabaseError(e)
                        })?
                };

                let new_order_items: Vec<NewOrderItem> = draft
                    .item_ids
                    .iter()
                    .zip(0..)
                    .map(|(&item, position)| NewOrderItem {
                        order_id: order.id,
                        menu_item_id: item,
                        position,
                    })
                    .collect();

                {
                    use crate::db::schema::order_items::dsl::*;
                    diesel::insert_into(order_items)
                        .values(&new_order_items)
                        .execute(conn)
                        .map_err(|e| {
                            error!(
                                "create_order: error inserting {} line items for order {}: {}",
                                new_order_items.len(),
                                draft.order_token,
                                e
                            );
                            RepositoryError::DatabaseError(e)
                        })?;
                }

                debug!(
                    "create_order: wrote order {} with {} line items",
                    order.order_token,
                    new_order_items.len()
                );
                Ok(order)
            })
    }

    /// Sums catalog prices, once per occurrence of each id.
    fn price_items(conn: &mut PgConnection, item_ids: &[i32]) -> Result<Decimal, RepositoryError> {
        use crate::db::schema::menu_items::dsl::*;

        let distinct: BTreeSet<i32> = item_ids.iter().copied().collect();
        let prices: HashMap<i32, f64> = menu_items
            .filter(id.eq_any(distinct.iter().copied().collect::<Vec<_>>()))
            .select((id, price))
            .load::<(i32, f64)>(conn)
            .map_err(|e| {
                error!(
                    "create_order: error loading menu prices for item_ids {:?}: {}",
                    item_ids, e
                );
                RepositoryError::DatabaseError(e)
            })?
            .into_iter()
            .collect();

        let unknown: Vec<i32> = distinct
            .iter()
            .copied()
            .filter(|item| !prices.contains_key(item))
            .collect();
        if !unknown.is_empty() {
            return Err(RepositoryError::UnknownItems(unknown));
        }

        item_ids.iter().try_fold(Decimal::ZERO, |total, item| {
            let item_price = prices[item];
            let amount = to_decimal(item_price).ok_or_else(|| {
                RepositoryError::ValidationError(format!(
                    "menu item {} has invalid price {}",
                    item, item_price
                ))
            })?;
            total.checked_add(amount).ok_or_else(|| {
                RepositoryError::ValidationError(format!(
                    "order total out of range at menu item {}",
                    item
                ))
            })
        })
    }

    pub fn get_order_by_token(
        &self,
        token: &str,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_order_by_token: failed to acquire DB connection for order {}: {}",
                token, e
            );
            e
        })?;

        let order = {
            use crate::db::schema::orders::dsl::*;
            orders
                .filter(order_token.eq(token))
                .select(Order::as_select())
                .first::<Order>(conn.connection())
                .map_err(|e| match e {
                    Error::NotFound => RepositoryError::NotFound(format!("orders: {}", token)),
                    other => {
                        error!(
                            "get_order_by_token: error loading order {}: {}",
                            token, other
                        );
                        RepositoryError::DatabaseError(other)
                    }
                })?
        };

        let items = {
            use crate::db::schema::order_items::dsl::*;
            OrderItem::belonging_to(&order)
                .order(position.asc())
                .select(OrderItem::as_select())
                .load::<OrderItem>(conn.connection())
                .map_err(|e| {
                    error!(
                        "get_order_by_token: error loading items of order {}: {}",
                        token, e
                    );
                    RepositoryError::DatabaseError(e)
                })?
        };

        Ok((order, items))
    }

    pub fn get_orders_by_user(&self, search_user_id: i32) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_orders_by_user: failed to acquire DB connection for user_id {}: {}",
                search_user_id, e
            );
            e
        })?;

        use crate::db::schema::orders::dsl::*;
        orders
            .filter(user_id.eq(search_user_id))
            .order((created_at.desc(), id.desc()))
            .select(Order::as_select())
            .load::<Order>(conn.connection())
            .map_err(|e| {
                error!(
                    "get_orders_by_user: error loading orders for user_id {}: {}",
                    search_user_id, e
                );
                RepositoryError::DatabaseError(e)
            })
    }
}

impl OrderStore for OrderOperations {
    fn create_order(&self, draft: &OrderDraft) -> Result<Order, RepositoryError> {
        OrderOperations::create_order(self, draft)
    }
}
