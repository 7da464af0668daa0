pub mod booking_record;
pub mod booking_service;
pub mod config;
pub mod slot;
pub mod slot_registry;
pub mod store;
