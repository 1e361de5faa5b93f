use crate::core::calculator::schedule::next_check_in;
use crate::core::{require_key, require_value};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    fmt_date, load_connection, load_connections_by_check_in, load_due_connections,
    record_check_in,
};
use crate::errors::{AppError, AppResult};
use crate::models::check_in_sheet::CheckInSheet;
use crate::models::connection::Connection;
use crate::ui::messages::success;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::checkbox;
use crate::utils::table::Table;
use chrono::NaiveDate;
use rand::Rng;

pub struct CheckInLogic;

impl CheckInLogic {
    /// Check-in list of a user, soonest check-in first.
    pub fn sheet(pool: &mut DbPool, user_id: &str) -> AppResult<CheckInSheet> {
        let user_id = require_value(user_id, "UserId must be provided")?;
        let connections = load_connections_by_check_in(&pool.conn, &user_id)?;
        Ok(CheckInSheet::from_connections(&connections))
    }

    /// Connections due on or before `today`.
    pub fn due(pool: &mut DbPool, user_id: &str, today: NaiveDate) -> AppResult<Vec<Connection>> {
        let user_id = require_value(user_id, "UserId must be provided")?;
        load_due_connections(&pool.conn, &user_id, &today)
    }

    /// Record a check-in for every contact in `contact_ids`, all or nothing.
    /// Repeated ids count once.
    ///
    /// Each connection gets `last_check_in = today` and a freshly scheduled
    /// next check-in counted from today.
    pub fn check_in<R: Rng + ?Sized>(
        pool: &mut DbPool,
        user_id: &str,
        contact_ids: &[String],
        today: NaiveDate,
        rng: &mut R,
    ) -> AppResult<Vec<Connection>> {
        if contact_ids.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one ContactId must be provided".into(),
            ));
        }

        // each contact is checked in once, in first-seen order
        let mut keys: Vec<(String, String)> = Vec::with_capacity(contact_ids.len());
        for contact_id in contact_ids {
            let key = require_key(user_id, contact_id)?;
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        let tx = pool.conn.transaction()?;
        let mut done = Vec::with_capacity(keys.len());

        for (user_id, contact_id) in keys {
            let mut connection = load_connection(&tx, &user_id, &contact_id)?.ok_or(
                AppError::ConnectionNotFound {
                    user_id: user_id.clone(),
                    contact_id: contact_id.clone(),
                },
            )?;

            let next = next_check_in(connection.check_in_frequency, today, rng);
            record_check_in(&tx, &user_id, &contact_id, &today, &next)?;

            ttlog(
                &tx,
                "checkin",
                &format!("{}/{}", user_id, contact_id),
                &format!(
                    "Checked in with '{}', next check-in {}",
                    connection.name,
                    fmt_date(&next)
                ),
            )?;

            connection.last_check_in = Some(today);
            connection.check_in_date = next;
            done.push(connection);
        }

        tx.commit()?;

        for c in &done {
            success(format!(
                "Checked in with {} — next check-in {}",
                c.name,
                fmt_date(&c.check_in_date)
            ));
        }

        Ok(done)
    }

    /// Toggle the given 1-based rows of `sheet` and return the contact ids
    /// of the rows left checked.
    pub fn mark_rows(sheet: &mut CheckInSheet, rows: &[usize]) -> AppResult<Vec<String>> {
        for &row in rows {
            if row == 0 {
                return Err(AppError::Sheet("rows are numbered from 1".into()));
            }
            if row > sheet.len() {
                return Err(AppError::Sheet(format!(
                    "row {} out of range (1..={})",
                    row,
                    sheet.len()
                )));
            }
            sheet.toggle(row - 1)?;
        }
        Ok(sheet.checked_contact_ids())
    }
}

/// Render the check-in list as a table: one line per row.
pub fn render_sheet(sheet: &CheckInSheet, separator: char) -> String {
    let mut table = Table::new(&["#", "", "Connection", "Last Checked", "Next Check-In"]);

    for (i, row) in sheet.rows().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            checkbox(sheet.is_checked(i)).to_string(),
            row.name.clone(),
            colorize_optional(&row.last_checked),
            colorize_optional(row.next_check_in.as_deref().unwrap_or("--")),
        ]);
    }

    table.render(separator)
}
