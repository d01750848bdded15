use serde::{Deserialize, Serialize};

/// Identity attached to a browser session after a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPrincipal {
    pub user_id: i32,
    pub name: String,
}
