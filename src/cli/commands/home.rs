use crate::config::Config;
use crate::core::home::HomeLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::utils::date::today;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = open_db(&cfg.database)?;
    let now = today();

    let summary = HomeLogic::summary(
        &mut pool,
        &cfg.default_user,
        now,
        cfg.birthday_window_days,
    )?;
    HomeLogic::print(&summary, cfg, now);

    Ok(())
}
