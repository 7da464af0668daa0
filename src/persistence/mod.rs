pub(crate) mod models;
pub(crate) mod schema;
pub mod sqlite_booking_store;
