use std::sync::Arc;

use crate::domain::booking_service::BookingService;
use crate::domain::config::BookingConfig;
use crate::domain::slot_registry::SlotRegistry;
use crate::error::Result;

pub mod api;
pub mod console;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod persistence;

/// Wires a fresh slot registry to the store selected by `config`.
///
/// Opening the SQLite store creates the bookings table when it is missing.
pub fn build_booking_service(config: &BookingConfig) -> Result<BookingService> {
    let registry = Arc::new(SlotRegistry::new());
    let store = config.store_type.get_instance(config)?;
    log::info!("Booking service ready, store: {}.", store.location());

    Ok(BookingService::new(registry, store))
}
