use crate::core::calculator::schedule::next_check_in;
use crate::core::require_value;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{connection_exists, fmt_date, insert_connection};
use crate::errors::{AppError, AppResult};
use crate::models::check_in_sheet::CheckInSheet;
use crate::models::connection::Connection;
use crate::models::frequency::CheckInFrequency;
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use rand::Rng;
use uuid::Uuid;

/// Input of the `add` command.
#[derive(Debug, Clone)]
pub struct NewConnection {
    pub user_id: String,
    /// Generated (UUID v4) when not supplied.
    pub contact_id: Option<String>,
    pub name: String,
    pub birthday: Option<NaiveDate>,
    pub frequency: CheckInFrequency,
    pub last_check_in: Option<NaiveDate>,
}

/// Placeholder contacts of the mobile app's check-in list, used by
/// `init --sample`.
pub const SAMPLE_NAMES: [&str; 3] = ["Wormy", "Fank", "Eeham"];
pub const SAMPLE_FORMER_CHECK_INS: [&str; 3] = ["8-2-2024", "3-5-2024", "10-1-2024"];
pub const SAMPLE_NEXT_CHECK_INS: [&str; 3] = ["10-24-2024", "10-24-2024", "10-24-2024"];

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate, schedule the first check-in and store the connection.
    ///
    /// The first check-in is scheduled from the last check-in when one is
    /// given, otherwise from `today`.
    pub fn apply<R: Rng + ?Sized>(
        pool: &mut DbPool,
        req: NewConnection,
        today: NaiveDate,
        rng: &mut R,
    ) -> AppResult<Connection> {
        let user_id = require_value(&req.user_id, "UserId must be provided")?;
        let name = require_value(&req.name, "Name must be provided")?;

        let contact_id = match req.contact_id.as_deref() {
            Some(id) => require_value(id, "ContactId must not be blank")?,
            None => Uuid::new_v4().to_string(),
        };

        if let Some(last) = req.last_check_in
            && last > today
        {
            return Err(AppError::InvalidDate(format!(
                "last check-in {} is in the future",
                fmt_date(&last)
            )));
        }

        let base = req.last_check_in.unwrap_or(today);
        let check_in_date = next_check_in(req.frequency, base, rng);

        let mut connection = Connection::new(
            &user_id,
            &contact_id,
            &name,
            req.birthday,
            req.frequency,
            check_in_date,
        );
        connection.last_check_in = req.last_check_in;

        let tx = pool.conn.transaction()?;

        if connection_exists(&tx, &user_id, &contact_id)? {
            return Err(AppError::DuplicateConnection {
                user_id,
                contact_id,
            });
        }

        insert_connection(&tx, &connection)?;
        ttlog(
            &tx,
            "add",
            &format!("{}/{}", user_id, contact_id),
            &format!(
                "Added '{}' ({}) with CheckInDate {}",
                name,
                req.frequency,
                fmt_date(&check_in_date)
            ),
        )?;
        tx.commit()?;

        success(format!(
            "Successfully added contact {} for user {} with CheckInDate {}",
            contact_id,
            user_id,
            fmt_date(&check_in_date)
        ));

        Ok(connection)
    }

    /// Insert the sample contacts for `user_id`, skipping those already
    /// present. Returns how many were added.
    pub fn seed_sample(pool: &mut DbPool, user_id: &str) -> AppResult<usize> {
        let user_id = require_value(user_id, "UserId must be provided")?;
        let sheet = CheckInSheet::from_parallel(
            &SAMPLE_NAMES,
            &SAMPLE_FORMER_CHECK_INS,
            Some(&SAMPLE_NEXT_CHECK_INS[..]),
        )?;

        let tx = pool.conn.transaction()?;
        let mut added = 0;

        for row in sheet.rows() {
            let contact_id = row.name.to_lowercase();
            if connection_exists(&tx, &user_id, &contact_id)? {
                continue;
            }

            let last = parse_date(&row.last_checked)
                .ok_or_else(|| AppError::InvalidDate(row.last_checked.clone()))?;
            let next_str = row.next_check_in.clone().unwrap_or_default();
            let next = parse_date(&next_str).ok_or(AppError::InvalidDate(next_str))?;

            let mut connection = Connection::new(
                &user_id,
                &contact_id,
                &row.name,
                None,
                CheckInFrequency::Monthly,
                next,
            );
            connection.last_check_in = Some(last);

            insert_connection(&tx, &connection)?;
            added += 1;
        }

        ttlog(
            &tx,
            "seed",
            &user_id,
            &format!("Seeded {} sample connections", added),
        )?;
        tx.commit()?;

        Ok(added)
    }
}
