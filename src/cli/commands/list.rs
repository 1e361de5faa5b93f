use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::queries::{fmt_date, load_connections_for_user};
use crate::errors::{AppError, AppResult};
use crate::models::connection::Connection;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_due, colorize_optional};
use crate::utils::date::today;
use crate::utils::describe_due;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let pool = open_db(&cfg.database)?;
        let connections = load_connections_for_user(&pool.conn, &cfg.default_user)?;

        if *json {
            let out = serde_json::to_string_pretty(&connections)
                .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
            println!("{}", out);
            return Ok(());
        }

        if connections.is_empty() {
            info(format!("No connections for user {}.", cfg.default_user));
            return Ok(());
        }

        header(format!(
            "My Connections ({}) — {}",
            connections.len(),
            cfg.default_user
        ));
        print!("{}", render(&connections, cfg.separator()));
    }

    Ok(())
}

fn render(connections: &[Connection], separator: char) -> String {
    let now = today();
    let mut table = Table::new(&[
        "Connection",
        "Contact id",
        "Frequency",
        "Last Checked",
        "Next Check-In",
        "Birthday",
    ]);

    for c in connections {
        let days = c.days_until_check_in(now);
        table.add_row(vec![
            c.name.clone(),
            c.contact_id.clone(),
            c.check_in_frequency.to_string(),
            colorize_optional(&c.last_check_in_str()),
            format!(
                "{} {}({}){}",
                fmt_date(&c.check_in_date),
                color_for_due(days),
                describe_due(days),
                RESET
            ),
            colorize_optional(&c.birthday_str()),
        ]);
    }

    table.render(separator)
}
