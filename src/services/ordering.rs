use actix_web::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::SessionPrincipal;
use crate::db::RepositoryError;
use crate::models::common::OrderDraft;
use crate::services::delivery::estimate_delivery_minutes;
use crate::services::locations::LocationTable;
use crate::traits::OrderStore;

pub const ORDER_TOKEN_PREFIX: &str = "ORD";

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("Unauthorized access")]
    Unauthorized,
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Invalid location")]
    InvalidLocation(String),
    #[error("Order contains unknown menu items: {0:?}")]
    UnknownItems(Vec<i32>),
    #[error("Order placement failed.")]
    Persistence(#[source] RepositoryError),
}

impl PlacementError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PlacementError::Unauthorized => StatusCode::UNAUTHORIZED,
            PlacementError::EmptyCart
            | PlacementError::InvalidLocation(_)
            | PlacementError::UnknownItems(_) => StatusCode::BAD_REQUEST,
            PlacementError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for PlacementError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UnknownItems(ids) => PlacementError::UnknownItems(ids),
            other => PlacementError::Persistence(other),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_token: String,
    pub estimated_minutes: i32,
}

/// `ORD-<8 hex chars>-<user id>`
pub fn generate_order_token(user_id: i32) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", ORDER_TOKEN_PREFIX, &random[..8], user_id)
}

/// Validates a checkout request and hands it to the store.
///
/// Checks run in order: principal, non-empty cart, known location. The store
/// is only reached once all three pass.
pub fn place_order<S: OrderStore + ?Sized>(
    store: &S,
    locations: &LocationTable,
    principal: Option<&SessionPrincipal>,
    location: &str,
    cart_item_ids: Vec<i32>,
) -> Result<PlacedOrder, PlacementError> {
    let principal = principal.ok_or(PlacementError::Unauthorized)?;

    if cart_item_ids.is_empty() {
        return Err(PlacementError::EmptyCart);
    }

    let resolved = locations
        .resolve(location)
        .ok_or_else(|| PlacementError::InvalidLocation(location.to_string()))?;

    let draft = OrderDraft {
        order_token: generate_order_token(principal.user_id),
        user_id: principal.user_id,
        location: resolved,
        estimated_delivery_time: estimate_delivery_minutes(
            locations,
            resolved.human_readable(),
            cart_item_ids.len(),
        ),
        item_ids: cart_item_ids,
    };

    let order = store.create_order(&draft).map_err(|e| {
        match &e {
            RepositoryError::UnknownItems(ids) => warn!(
                "place_order: rejected order for user {} with unknown items {:?}",
                draft.user_id, ids
            ),
            other => error!(
                "place_order: failed to persist order {} for user {}: {}",
                draft.order_token, draft.user_id, other
            ),
        }
        PlacementError::from(e)
    })?;

    info!(
        "place_order: order {} placed by user {} for {} ({} items, {} min)",
        order.order_token,
        order.user_id,
        order.location,
        draft.item_ids.len(),
        order.estimated_delivery_time
    );

    Ok(PlacedOrder {
        order_token: order.order_token,
        estimated_minutes: order.estimated_delivery_time,
    })
}
