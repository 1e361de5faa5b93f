use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckInLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::today;

/// Record check-ins for the given contacts (or every due one).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        contact_ids,
        all_due,
    } = cmd
    {
        let mut pool = open_db(&cfg.database)?;
        let now = today();

        let mut targets = contact_ids.clone();
        if *all_due {
            for c in CheckInLogic::due(&mut pool, &cfg.default_user, now)? {
                if !targets.contains(&c.contact_id) {
                    targets.push(c.contact_id);
                }
            }
        }

        if targets.is_empty() {
            info("No check-ins due today.");
            return Ok(());
        }

        CheckInLogic::check_in(
            &mut pool,
            &cfg.default_user,
            &targets,
            now,
            &mut rand::thread_rng(),
        )?;
    }

    Ok(())
}
