pub mod check_in_sheet;
pub mod connection;
pub mod frequency;
