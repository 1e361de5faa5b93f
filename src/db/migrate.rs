use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

type MigrationFn = fn(&Connection) -> Result<()>;

/// Ordered list of schema migrations: (version, description, body).
const MIGRATIONS: &[(&str, &str, MigrationFn)] = &[
    (
        "20241020_0001_create_connections",
        "Created connections table",
        create_connections_table,
    ),
    (
        "20241105_0002_add_last_check_in",
        "Added last_check_in to connections",
        add_last_check_in_column,
    ),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn create_connections_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS connections (
            user_id            TEXT NOT NULL,
            contact_id         TEXT NOT NULL,
            name               TEXT NOT NULL,
            birthday           TEXT,
            check_in_frequency TEXT NOT NULL CHECK(check_in_frequency IN
                ('Twice a Month','Monthly','Quarterly','Semiannually','Twice a Year')),
            check_in_date      TEXT NOT NULL,
            created_at         TEXT NOT NULL,
            PRIMARY KEY (user_id, contact_id)
        );

        CREATE INDEX IF NOT EXISTS idx_connections_user_date
            ON connections(user_id, check_in_date);
        "#,
    )?;
    Ok(())
}

fn add_last_check_in_column(conn: &Connection) -> Result<()> {
    if column_exists(conn, "connections", "last_check_in")? {
        return Ok(());
    }

    conn.execute("ALTER TABLE connections ADD COLUMN last_check_in TEXT;", [])
        .map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to add 'last_check_in' column: {}", e)),
            )
        })?;
    Ok(())
}

fn backup_before_migration(db_path: &str, version: &str) -> Result<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let to_sql_err = |stage: &str, e: &dyn std::fmt::Display| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed ({}): {}",
            stage, e
        ))))
    };

    let backup_name = format!(
        "{}-backup_db_pre_{}.zip",
        Local::now().format("%Y%m%d_%H%M%S"),
        version
    );

    let backup_path = std::path::Path::new(db_path)
        .parent()
        .map(|p| p.join(&backup_name))
        .unwrap_or_else(|| std::path::PathBuf::from(&backup_name));

    let file = File::create(&backup_path).map_err(|e| to_sql_err("create", &e))?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| to_sql_err("start_file", &e))?;

    let db_content = fs::read(db_path).map_err(|e| to_sql_err("read", &e))?;
    zip.write_all(&db_content)
        .map_err(|e| to_sql_err("write_all", &e))?;
    zip.finish().map_err(|e| to_sql_err("finish", &e))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Versions not yet recorded in the `log` table.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for (version, _, _) in MIGRATIONS {
        if !is_applied(conn, version)? {
            out.push(*version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let pending = pending_migrations(conn)?;
    if pending.is_empty() {
        return Ok(());
    }

    // Existing data → safety backup before touching the schema
    if table_exists(conn, "connections")? {
        warning("Schema upgrade pending — creating safety backup before migration...");

        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if !db_path.is_empty() {
            backup_before_migration(&db_path, pending[0])?;
        } else {
            warning("Could not determine DB path — backup skipped.");
        }
    }

    for (version, message, body) in MIGRATIONS {
        if !pending.contains(version) {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        body(&tx)?;
        mark_applied(&tx, version, message)?;
        tx.commit()?;

        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}
