pub mod delete;
pub mod error;
pub mod field;
pub mod format;
pub mod graphql;
pub mod notify;
pub mod table;
pub mod trips_on_users;
