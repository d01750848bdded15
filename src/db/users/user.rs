use crate::db::errors::RepositoryError;
use crate::db::{DbConnection, DbPool};
use crate::models::user::User;
use diesel::prelude::*;
use diesel::result::Error;
use log::error;

#[derive(Clone)]
pub struct UserOperations {
    pool: DbPool,
}

/// Emails are stored lower-case; login input is matched the same way.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl UserOperations {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Looks up a user by the (email, campus id) pair. Both must match.
    pub fn get_user_by_credentials(
        &self,
        email_addr: &str,
        campus_id_val: &str,
    ) -> Result<User, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("get_user_by_credentials: failed to acquire DB connection: {}", e);
            e
        })?;

        let email_addr = normalize_email(email_addr);
        let campus_id_val = campus_id_val.trim();

        use crate::db::schema::users::dsl::*;
        users
            .filter(email.eq(&email_addr))
            .filter(campus_id.eq(campus_id_val))
            .select(User::as_select())
            .first::<User>(conn.connection())
            .map_err(|e| match e {
                Error::NotFound => RepositoryError::NotFound(format!("user: {}", email_addr)),
                other => {
                    error!(
                        "get_user_by_credentials: error fetching user with email '{}': {}",
                        email_addr, other
                    );
                    RepositoryError::DatabaseError(other)
                }
            })
    }
}
