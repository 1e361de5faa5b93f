use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        all_users,
        force,
    } = cmd
    {
        let mut pool = open_db(&cfg.database)?;
        let user = (!*all_users).then_some(cfg.default_user.as_str());
        ExportLogic::export(&mut pool, *format, file, user, *force)?;
    }

    Ok(())
}
