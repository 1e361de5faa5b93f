use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::confirm;
use crate::core::del::DeleteLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { contact_id, yes } = cmd {
        let prompt = format!(
            "Delete contact {} for user {}? This action is irreversible.",
            contact_id, cfg.default_user
        );

        if !*yes && !confirm(&prompt, &mut io::stdin().lock()) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_db(&cfg.database)?;
        DeleteLogic::apply(&mut pool, &cfg.default_user, contact_id)?;
    }

    Ok(())
}
