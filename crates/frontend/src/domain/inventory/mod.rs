pub mod accept;
pub mod api;
pub mod csv;
pub mod template;
pub mod upload;
pub mod ui;
