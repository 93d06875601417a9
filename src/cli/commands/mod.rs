pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod summary;
pub mod totals;
