pub mod add;
pub mod backup;
pub mod calculator;
pub mod checkin;
pub mod config;
pub mod del;
pub mod get;
pub mod home;
pub mod log;
pub mod update;

use crate::errors::{AppError, AppResult};

/// Trimmed `value`, or `InvalidInput(msg)` when it is blank.
pub(crate) fn require_value(value: &str, msg: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::InvalidInput(msg.to_string()));
    }
    Ok(v.to_string())
}

/// Both halves of the (user, contact) key, trimmed and non-blank.
pub(crate) fn require_key(user_id: &str, contact_id: &str) -> AppResult<(String, String)> {
    const MSG: &str = "UserId and ContactId must be provided";
    Ok((require_value(user_id, MSG)?, require_value(contact_id, MSG)?))
}
