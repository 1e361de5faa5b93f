use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::{CheckInLogic, render_sheet};
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::check_in_sheet::CheckInSheet;
use crate::ui::messages::{header, info, warning};
use crate::utils::date::today;

/// Print the check-in list; `--mark` ticks rows and records their check-ins.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkins { due, mark } = cmd {
        let mut pool = open_db(&cfg.database)?;
        let now = today();

        let mut sheet = if *due {
            let connections = CheckInLogic::due(&mut pool, &cfg.default_user, now)?;
            CheckInSheet::from_connections(&connections)
        } else {
            CheckInLogic::sheet(&mut pool, &cfg.default_user)?
        };

        // rows are validated even when there is nothing to show
        let contact_ids = CheckInLogic::mark_rows(&mut sheet, mark)?;

        if sheet.is_empty() {
            info(if *due {
                "No check-ins due today."
            } else {
                "No connections yet. Add one with `connectify add <NAME>`."
            });
            return Ok(());
        }

        header(if *due { "Due Check-Ins" } else { "Check-In List" });
        print!("{}", render_sheet(&sheet, cfg.separator()));

        if mark.is_empty() {
            return Ok(());
        }

        if contact_ids.is_empty() {
            warning("No rows left checked — nothing recorded.");
            return Ok(());
        }

        println!();
        CheckInLogic::check_in(
            &mut pool,
            &cfg.default_user,
            &contact_ids,
            now,
            &mut rand::thread_rng(),
        )?;
    }

    Ok(())
}
