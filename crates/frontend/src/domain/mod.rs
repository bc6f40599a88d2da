pub mod activity;
pub mod inventory;
