pub mod checker;
pub mod error;
pub mod models;
pub mod notify;
pub mod tvh_conn;
