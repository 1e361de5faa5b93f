use crate::errors::{AppError, AppResult};
use crate::models::connection::{Connection, ConnectionPatch};
use crate::models::frequency::CheckInFrequency;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{OptionalExtension, Result, Row, params, params_from_iter};
use std::collections::BTreeMap;

const SELECT_COLUMNS: &str = "SELECT user_id, contact_id, name, birthday, check_in_frequency,
        check_in_date, last_check_in, created_at
 FROM connections";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_db_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(s.to_string())))
}

fn parse_opt_db_date(s: Option<String>) -> Result<Option<NaiveDate>> {
    match s {
        Some(ref v) if !v.is_empty() => Ok(Some(parse_db_date(v)?)),
        _ => Ok(None),
    }
}

pub fn fmt_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn map_row(row: &Row) -> Result<Connection> {
    let freq_str: String = row.get("check_in_frequency")?;
    let check_in_frequency = CheckInFrequency::from_label(&freq_str)
        .ok_or_else(|| conversion_error(AppError::InvalidFrequency(freq_str.clone())))?;

    let check_in_date_str: String = row.get("check_in_date")?;

    Ok(Connection {
        user_id: row.get("user_id")?,
        contact_id: row.get("contact_id")?,
        name: row.get("name")?,
        birthday: parse_opt_db_date(row.get("birthday")?)?,
        check_in_frequency,
        check_in_date: parse_db_date(&check_in_date_str)?,
        last_check_in: parse_opt_db_date(row.get("last_check_in")?)?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_connection(conn: &rusqlite::Connection, c: &Connection) -> AppResult<()> {
    conn.execute(
        "INSERT INTO connections (user_id, contact_id, name, birthday, check_in_frequency,
                                  check_in_date, last_check_in, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            c.user_id,
            c.contact_id,
            c.name,
            c.birthday.as_ref().map(fmt_date),
            c.check_in_frequency.label(),
            fmt_date(&c.check_in_date),
            c.last_check_in.as_ref().map(fmt_date),
            c.created_at,
        ],
    )?;
    Ok(())
}

pub fn connection_exists(
    conn: &rusqlite::Connection,
    user_id: &str,
    contact_id: &str,
) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM connections WHERE user_id = ?1 AND contact_id = ?2 LIMIT 1",
    )?;
    Ok(stmt.exists(params![user_id, contact_id])?)
}

pub fn load_connection(
    conn: &rusqlite::Connection,
    user_id: &str,
    contact_id: &str,
) -> AppResult<Option<Connection>> {
    let sql = format!("{SELECT_COLUMNS} WHERE user_id = ?1 AND contact_id = ?2");
    let found = conn
        .query_row(&sql, params![user_id, contact_id], map_row)
        .optional()?;
    Ok(found)
}

fn collect(conn: &rusqlite::Connection, sql: &str, args: &[&str]) -> AppResult<Vec<Connection>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params_from_iter(args.iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All connections of a user, alphabetically.
pub fn load_connections_for_user(
    conn: &rusqlite::Connection,
    user_id: &str,
) -> AppResult<Vec<Connection>> {
    let sql = format!("{SELECT_COLUMNS} WHERE user_id = ?1 ORDER BY name COLLATE NOCASE ASC");
    collect(conn, &sql, &[user_id])
}

/// All connections of a user, soonest check-in first.
pub fn load_connections_by_check_in(
    conn: &rusqlite::Connection,
    user_id: &str,
) -> AppResult<Vec<Connection>> {
    let sql = format!(
        "{SELECT_COLUMNS} WHERE user_id = ?1 ORDER BY check_in_date ASC, name COLLATE NOCASE ASC"
    );
    collect(conn, &sql, &[user_id])
}

/// Connections whose next check-in is on or before `today`.
pub fn load_due_connections(
    conn: &rusqlite::Connection,
    user_id: &str,
    today: &NaiveDate,
) -> AppResult<Vec<Connection>> {
    let sql = format!(
        "{SELECT_COLUMNS} WHERE user_id = ?1 AND check_in_date <= ?2
         ORDER BY check_in_date ASC, name COLLATE NOCASE ASC"
    );
    let today_str = fmt_date(today);
    collect(conn, &sql, &[user_id, today_str.as_str()])
}

pub fn load_all_connections(conn: &rusqlite::Connection) -> AppResult<Vec<Connection>> {
    let sql = format!("{SELECT_COLUMNS} ORDER BY user_id ASC, name COLLATE NOCASE ASC");
    collect(conn, &sql, &[])
}

/// Apply a partial update; only provided fields end up in the `SET` clause.
/// Returns the written attributes keyed by attribute name.
pub fn update_connection_fields(
    conn: &rusqlite::Connection,
    user_id: &str,
    contact_id: &str,
    patch: &ConnectionPatch,
) -> AppResult<BTreeMap<String, String>> {
    let mut assignments: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();
    let mut updated = BTreeMap::new();

    if let Some(name) = &patch.name {
        assignments.push("name = ?");
        values.push(Value::Text(name.clone()));
        updated.insert("Name".to_string(), name.clone());
    }

    if let Some(birthday) = &patch.birthday {
        assignments.push("birthday = ?");
        values.push(Value::Text(fmt_date(birthday)));
        updated.insert("Birthday".to_string(), fmt_date(birthday));
    }

    if let Some(freq) = &patch.check_in_frequency {
        assignments.push("check_in_frequency = ?");
        values.push(Value::Text(freq.label().to_string()));
        updated.insert("CheckInFrequency".to_string(), freq.label().to_string());
    }

    if assignments.is_empty() {
        return Err(AppError::NothingToUpdate);
    }

    let sql = format!(
        "UPDATE connections SET {} WHERE user_id = ? AND contact_id = ?",
        assignments.join(", ")
    );
    values.push(Value::Text(user_id.to_string()));
    values.push(Value::Text(contact_id.to_string()));

    let changed = conn.execute(&sql, params_from_iter(values))?;
    if changed == 0 {
        return Err(AppError::ConnectionNotFound {
            user_id: user_id.to_string(),
            contact_id: contact_id.to_string(),
        });
    }

    Ok(updated)
}

/// Store a completed check-in and the next scheduled date.
/// Returns false when no such connection exists.
pub fn record_check_in(
    conn: &rusqlite::Connection,
    user_id: &str,
    contact_id: &str,
    checked_on: &NaiveDate,
    next: &NaiveDate,
) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE connections SET last_check_in = ?1, check_in_date = ?2
         WHERE user_id = ?3 AND contact_id = ?4",
        params![fmt_date(checked_on), fmt_date(next), user_id, contact_id],
    )?;
    Ok(changed > 0)
}

/// Returns true when a row was actually removed.
pub fn delete_connection(
    conn: &rusqlite::Connection,
    user_id: &str,
    contact_id: &str,
) -> AppResult<bool> {
    let removed = conn.execute(
        "DELETE FROM connections WHERE user_id = ?1 AND contact_id = ?2",
        params![user_id, contact_id],
    )?;
    Ok(removed > 0)
}
