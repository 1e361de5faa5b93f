use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = open_db(&cfg.database)?;
        LogLogic::print_log(&mut pool)?;
    } else {
        info("Nothing to do: use `connectify log --print`.");
    }

    Ok(())
}
