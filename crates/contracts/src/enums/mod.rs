pub mod stock_status;
