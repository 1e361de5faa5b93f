use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::birthdays::days_until_birthday;
use crate::core::get::GetLogic;
use crate::db::initialize::open_db;
use crate::db::queries::fmt_date;
use crate::errors::{AppError, AppResult};
use crate::models::connection::Connection;
use crate::utils::colors::{CYAN, RESET, color_for_due, colorize_optional};
use crate::utils::date::today;
use crate::utils::describe_due;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { contact_id, json } = cmd {
        let mut pool = open_db(&cfg.database)?;
        let connection = GetLogic::apply(&mut pool, &cfg.default_user, contact_id)?;

        if *json {
            let out = serde_json::to_string_pretty(&connection)
                .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
            println!("{}", out);
        } else {
            print_connection(&connection);
        }
    }

    Ok(())
}

fn print_connection(c: &Connection) {
    let now = today();
    let days = c.days_until_check_in(now);

    println!("{}• Name:{}          {}", CYAN, RESET, c.name);
    println!("{}• Contact id:{}    {}", CYAN, RESET, c.contact_id);
    println!("{}• User:{}          {}", CYAN, RESET, c.user_id);
    println!("{}• Frequency:{}     {}", CYAN, RESET, c.check_in_frequency);
    println!(
        "{}• Last checked:{}  {}",
        CYAN,
        RESET,
        colorize_optional(&c.last_check_in_str())
    );
    println!(
        "{}• Next check-in:{} {} {}({}){}",
        CYAN,
        RESET,
        fmt_date(&c.check_in_date),
        color_for_due(days),
        describe_due(days),
        RESET
    );

    let birthday = match c.birthday.and_then(|b| days_until_birthday(b, now).map(|d| (b, d))) {
        Some((b, d)) => format!("{} (in {} days)", fmt_date(&b), d),
        None => colorize_optional("--"),
    };
    println!("{}• Birthday:{}      {}", CYAN, RESET, birthday);
}
