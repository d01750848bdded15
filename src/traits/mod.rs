use crate::db::RepositoryError;
use crate::models::common::{Order, OrderDraft};

/// Durable sink for placed orders.
///
/// Implementations must price the draft from the catalog and write the order
/// together with its line items in a single transaction. Unknown item ids
/// reject the whole draft with [`RepositoryError::UnknownItems`].
pub trait OrderStore {
    fn create_order(&self, draft: &OrderDraft) -> Result<Order, RepositoryError>;
}
