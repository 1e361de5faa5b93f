use crate::core::{require_key, require_value};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::update_connection_fields;
use crate::errors::{AppError, AppResult};
use crate::models::connection::ConnectionPatch;
use crate::ui::messages::success;
use std::collections::BTreeMap;

pub struct UpdateLogic;

impl UpdateLogic {
    /// Write the fields present in `patch`. The stored check-in date is kept
    /// as is, even when the frequency changes.
    pub fn apply(
        pool: &mut DbPool,
        user_id: &str,
        contact_id: &str,
        mut patch: ConnectionPatch,
    ) -> AppResult<BTreeMap<String, String>> {
        let (user_id, contact_id) = require_key(user_id, contact_id)?;

        if patch.is_empty() {
            return Err(AppError::NothingToUpdate);
        }

        if let Some(name) = &patch.name {
            patch.name = Some(require_value(name, "Name must not be blank")?);
        }

        let tx = pool.conn.transaction()?;
        let updated = update_connection_fields(&tx, &user_id, &contact_id, &patch)?;

        let summary = describe_attributes(&updated);
        ttlog(
            &tx,
            "edit",
            &format!("{}/{}", user_id, contact_id),
            &format!("Updated {}", summary),
        )?;
        tx.commit()?;

        success(format!(
            "Successfully updated contact {} for user {}. Updated attributes: {}",
            contact_id, user_id, summary
        ));

        Ok(updated)
    }
}

/// `Birthday=1990-04-02, Name=Ann`
pub fn describe_attributes(attrs: &BTreeMap<String, String>) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}
