use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_connections, load_connections_for_user};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ConnectionExport;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export connections.
    ///
    /// - `file`: absolute path of the output file
    /// - `user`: restrict to one user, `None` exports every user
    ///
    /// Returns the number of exported rows; nothing is written when there
    /// are none.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        user: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }
        let path = Path::new(file);

        let rows = Self::load_rows(pool, user)?;
        if rows.is_empty() {
            warning("No connections found to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_or_warn(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} connections as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }

    pub fn load_rows(pool: &mut DbPool, user: Option<&str>) -> AppResult<Vec<ConnectionExport>> {
        let connections = match user {
            Some(u) => load_connections_for_user(&pool.conn, u)?,
            None => load_all_connections(&pool.conn)?,
        };
        Ok(connections.iter().map(ConnectionExport::from).collect())
    }
}
