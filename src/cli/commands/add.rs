use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, NewConnection};
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::frequency::CheckInFrequency;
use crate::utils::date::{parse_optional_date, today};

/// Add a connection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        contact_id,
        birthday,
        frequency,
        last_check_in,
    } = cmd
    {
        //
        // 1. Frequency (default from config)
        //
        let freq_input = frequency.as_deref().unwrap_or(&cfg.default_frequency);
        let frequency = CheckInFrequency::parse(freq_input)?;

        //
        // 2. Optional dates
        //
        let birthday = parse_optional_date(birthday.as_ref())?;
        let last_check_in = parse_optional_date(last_check_in.as_ref())?;

        //
        // 3. Store
        //
        let mut pool = open_db(&cfg.database)?;
        let req = NewConnection {
            user_id: cfg.default_user.clone(),
            contact_id: contact_id.clone(),
            name: name.clone(),
            birthday,
            frequency,
            last_check_in,
        };

        AddLogic::apply(&mut pool, req, today(), &mut rand::thread_rng())?;
    }

    Ok(())
}
