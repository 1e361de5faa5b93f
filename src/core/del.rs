use crate::core::require_key;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_connection;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a connection. Deleting a key that does not exist succeeds and
    /// returns `false`.
    pub fn apply(pool: &mut DbPool, user_id: &str, contact_id: &str) -> AppResult<bool> {
        let (user_id, contact_id) = require_key(user_id, contact_id)?;

        let tx = pool.conn.transaction()?;
        let removed = delete_connection(&tx, &user_id, &contact_id)?;

        if removed {
            ttlog(
                &tx,
                "del",
                &format!("{}/{}", user_id, contact_id),
                "Connection deleted",
            )?;
        }
        tx.commit()?;

        if removed {
            success(format!(
                "Successfully deleted contact {} for user {}",
                contact_id, user_id
            ));
        } else {
            info(format!(
                "Nothing to delete: no contact {} for user {}",
                contact_id, user_id
            ));
        }

        Ok(removed)
    }
}
