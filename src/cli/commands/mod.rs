pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod earn;
pub mod events;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod recover;
pub mod schedule;
pub mod status;
