pub mod add;
pub mod backup;
pub mod checkin;
pub mod checkins;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod home;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
