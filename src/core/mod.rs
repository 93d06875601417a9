pub mod add;
pub mod del;
pub mod import;
pub mod log;
pub mod report;
