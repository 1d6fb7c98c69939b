//! SQLite persistence for activities and participants

pub mod activity_store;
pub mod manager;

pub use activity_store::SqliteActivityStore;
pub use manager::DbManager;
