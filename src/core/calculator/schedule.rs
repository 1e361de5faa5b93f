//! Next check-in date computation.
//!
//! The next date is `today + frequency days`, shifted by a random offset
//! in `[-MAX_OFFSET_DAYS, +MAX_OFFSET_DAYS]` so that reminders for
//! connections added on the same day do not all land together.

use crate::models::frequency::CheckInFrequency;
use chrono::{NaiveDate, TimeDelta};
use rand::Rng;

pub const MAX_OFFSET_DAYS: i64 = 15;

/// Randomized next check-in date for `frequency`, counted from `today`.
pub fn next_check_in<R: Rng + ?Sized>(
    frequency: CheckInFrequency,
    today: NaiveDate,
    rng: &mut R,
) -> NaiveDate {
    let offset = rng.gen_range(-MAX_OFFSET_DAYS..=MAX_OFFSET_DAYS);
    today + TimeDelta::days(frequency.days() + offset)
}

/// Inclusive bounds of the dates `next_check_in` can return.
pub fn check_in_window(frequency: CheckInFrequency, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let target = today + TimeDelta::days(frequency.days());
    (
        target - TimeDelta::days(MAX_OFFSET_DAYS),
        target + TimeDelta::days(MAX_OFFSET_DAYS),
    )
}
