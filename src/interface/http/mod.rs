pub mod customers_handler;
pub mod emails_handler;
pub mod phones_handler;
pub mod problem;
