pub mod log;
pub mod ui;
