pub mod app_error;
pub mod date_format;
pub mod markup;
pub mod ports;
pub mod use_cases;
pub mod views;
