pub mod booking_store;
pub mod null_store;
pub mod store_type;
