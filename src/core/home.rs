use crate::config::Config;
use crate::core::calculator::birthdays::upcoming_birthdays;
use crate::core::checkin::{CheckInLogic, render_sheet};
use crate::core::require_value;
use crate::db::pool::DbPool;
use crate::db::queries::{fmt_date, load_connections_for_user};
use crate::errors::AppResult;
use crate::models::check_in_sheet::CheckInSheet;
use crate::models::connection::Connection;
use crate::ui::messages::{header, info};
use chrono::NaiveDate;

/// What the home screen shows for a given day.
#[derive(Debug)]
pub struct HomeSummary {
    pub due: Vec<Connection>,
    /// (name, birthday, days until)
    pub birthdays: Vec<(String, NaiveDate, i64)>,
}

pub struct HomeLogic;

impl HomeLogic {
    pub fn summary(
        pool: &mut DbPool,
        user_id: &str,
        today: NaiveDate,
        birthday_window_days: i64,
    ) -> AppResult<HomeSummary> {
        let user_id = require_value(user_id, "UserId must be provided")?;
        let all = load_connections_for_user(&pool.conn, &user_id)?;

        let due = CheckInLogic::due(pool, &user_id, today)?;

        let birthdays = upcoming_birthdays(&all, today, birthday_window_days)
            .into_iter()
            .filter_map(|(c, days)| c.birthday.map(|b| (c.name.clone(), b, days)))
            .collect();

        Ok(HomeSummary { due, birthdays })
    }

    pub fn print(summary: &HomeSummary, cfg: &Config, today: NaiveDate) {
        header(format!("Today's Check Ins — {}", fmt_date(&today)));

        if summary.due.is_empty() {
            info("No check-ins due today.");
        } else {
            let sheet = CheckInSheet::from_connections(&summary.due);
            print!("{}", render_sheet(&sheet, cfg.separator()));
        }

        if !summary.birthdays.is_empty() {
            println!();
            header(format!(
                "Birthdays in the next {} days",
                cfg.birthday_window_days
            ));
            for (name, birthday, days) in &summary.birthdays {
                let when = match days {
                    0 => "today 🎂".to_string(),
                    1 => "tomorrow".to_string(),
                    d => format!("in {} days", d),
                };
                println!("  {} ({}) — {}", name, birthday.format("%m-%d"), when);
            }
        }
    }
}
