use super::frequency::CheckInFrequency;
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub user_id: String,       // ⇔ connections.user_id
    pub contact_id: String,    // ⇔ connections.contact_id
    pub name: String,          // ⇔ connections.name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>, // ⇔ connections.birthday (TEXT "YYYY-MM-DD" or NULL)
    pub check_in_frequency: CheckInFrequency, // ⇔ connections.check_in_frequency (label)
    pub check_in_date: NaiveDate, // ⇔ connections.check_in_date (next scheduled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_check_in: Option<NaiveDate>, // ⇔ connections.last_check_in
    #[serde(skip)]
    pub created_at: String, // ⇔ connections.created_at (ISO8601)
}

impl Connection {
    /// Build a connection created from the CLI; `created_at` is set to now.
    pub fn new(
        user_id: &str,
        contact_id: &str,
        name: &str,
        birthday: Option<NaiveDate>,
        check_in_frequency: CheckInFrequency,
        check_in_date: NaiveDate,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            contact_id: contact_id.to_string(),
            name: name.to_string(),
            birthday,
            check_in_frequency,
            check_in_date,
            last_check_in: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Days until the next check-in; negative when overdue.
    pub fn days_until_check_in(&self, today: NaiveDate) -> i64 {
        (self.check_in_date - today).num_days()
    }

    pub fn last_check_in_str(&self) -> String {
        self.last_check_in
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "--".to_string())
    }

    pub fn birthday_str(&self) -> String {
        self.birthday
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "--".to_string())
    }
}

/// Partial update of a connection. Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionPatch {
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub check_in_frequency: Option<CheckInFrequency>,
}

impl ConnectionPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.birthday.is_none() && self.check_in_frequency.is_none()
    }
}
