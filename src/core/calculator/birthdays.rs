use crate::models::connection::Connection;
use chrono::{Datelike, NaiveDate};

/// Anniversary of `birthday` in `year`. Feb 29 falls back to Feb 28
/// in non-leap years.
fn anniversary(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Next anniversary on or after `today`.
pub fn next_birthday(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(birthday, today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        anniversary(birthday, today.year() + 1)
    }
}

pub fn days_until_birthday(birthday: NaiveDate, today: NaiveDate) -> Option<i64> {
    next_birthday(birthday, today).map(|d| (d - today).num_days())
}

/// Connections whose birthday falls within `window_days` from today,
/// closest first.
pub fn upcoming_birthdays(
    connections: &[Connection],
    today: NaiveDate,
    window_days: i64,
) -> Vec<(&Connection, i64)> {
    let mut out: Vec<(&Connection, i64)> = connections
        .iter()
        .filter_map(|c| {
            let days = days_until_birthday(c.birthday?, today)?;
            (days <= window_days).then_some((c, days))
        })
        .collect();

    out.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.name.cmp(&b.0.name)));
    out
}
