// src/export/model.rs

use crate::db::queries::fmt_date;
use crate::models::connection::Connection;
use serde::Serialize;

/// Flat row used by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionExport {
    pub user_id: String,
    pub contact_id: String,
    pub name: String,
    pub birthday: String,
    pub check_in_frequency: String,
    pub check_in_date: String,
    pub last_check_in: String,
}

impl From<&Connection> for ConnectionExport {
    fn from(c: &Connection) -> Self {
        Self {
            user_id: c.user_id.clone(),
            contact_id: c.contact_id.clone(),
            name: c.name.clone(),
            birthday: c.birthday.as_ref().map(fmt_date).unwrap_or_default(),
            check_in_frequency: c.check_in_frequency.label().to_string(),
            check_in_date: fmt_date(&c.check_in_date),
            last_check_in: c.last_check_in.as_ref().map(fmt_date).unwrap_or_default(),
        }
    }
}
