use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::update::UpdateLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::connection::ConnectionPatch;
use crate::models::frequency::CheckInFrequency;
use crate::utils::date::parse_optional_date;

/// Update the provided fields of a connection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        contact_id,
        name,
        birthday,
        frequency,
    } = cmd
    {
        let patch = ConnectionPatch {
            name: name.clone(),
            birthday: parse_optional_date(birthday.as_ref())?,
            check_in_frequency: frequency
                .as_deref()
                .map(CheckInFrequency::parse)
                .transpose()?,
        };

        let mut pool = open_db(&cfg.database)?;
        UpdateLogic::apply(&mut pool, &cfg.default_user, contact_id, patch)?;
    }

    Ok(())
}
