use crate::db::pool::DbPool;
use crate::db::queries::fmt_date;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str, today: NaiveDate) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) CONNECTIONS PER USER
    //
    let total: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM connections", [], |row| row.get(0))?;
    println!(
        "{}• Total connections:{} {}{}{}",
        CYAN, RESET, GREEN, total, RESET
    );

    let mut stmt = pool.conn.prepare(
        "SELECT user_id, COUNT(*) FROM connections GROUP BY user_id ORDER BY user_id ASC",
    )?;
    let per_user = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;
    for r in per_user {
        let (user, count) = r?;
        println!("    {}: {}", user, count);
    }

    //
    // 3) CHECK-IN DATE RANGE
    //
    let (first, last): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(check_in_date), MAX(check_in_date) FROM connections",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Scheduled check-ins:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) OVERDUE
    //
    let overdue: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM connections WHERE check_in_date < ?1",
        [fmt_date(&today)],
        |row| row.get(0),
    )?;
    let color = if overdue > 0 { RED } else { GREEN };
    println!("{}• Overdue:{} {}{}{}", CYAN, RESET, color, overdue, RESET);

    println!();
    Ok(())
}
