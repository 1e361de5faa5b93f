use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

/// Initialize the database.
/// Schema creation and upgrades are owned by the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Open the configured database for a command that needs existing data.
/// A missing file means `init` was never run.
pub fn open_db(path: &str) -> AppResult<DbPool> {
    if path != ":memory:" && !Path::new(path).exists() {
        return Err(AppError::Config(format!(
            "Database not found: {} (run `connectify init` first)",
            path
        )));
    }

    let pool = DbPool::new(path)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
