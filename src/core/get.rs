use crate::core::require_key;
use crate::db::pool::DbPool;
use crate::db::queries::load_connection;
use crate::errors::{AppError, AppResult};
use crate::models::connection::Connection;

pub struct GetLogic;

impl GetLogic {
    pub fn apply(pool: &mut DbPool, user_id: &str, contact_id: &str) -> AppResult<Connection> {
        let (user_id, contact_id) = require_key(user_id, contact_id)?;

        load_connection(&pool.conn, &user_id, &contact_id)?
            .ok_or(AppError::ConnectionNotFound {
                user_id,
                contact_id,
            })
    }
}
