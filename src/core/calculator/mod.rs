pub mod birthdays;
pub mod schedule;
