use thiserror::Error;

use crate::domain::booking_record::BookingRecord;
use crate::domain::slot::SlotNumber;

/// Errors raised while bringing the booking system up (configuration, logging, store setup).
#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse booking system configuration JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to build booking system configuration: {0}")]
    ConversionError(#[from] ConversionError),

    #[error("Failed to open booking store: {0}")]
    StoreError(#[from] StoreError),
}

/// Errors raised while converting DTOs or free text into domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unknown store type: '{0}'")]
    UnknownStoreType(String),

    #[error("Unknown vehicle type: '{0}'")]
    UnknownVehicleCategory(String),

    #[error("Database path must not be empty")]
    EmptyDatabasePath,
}

/// Reasons a booking request is rejected before any slot is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty name")]
    EmptyName,

    #[error("slot out of range")]
    SlotOutOfRange,

    #[error("unknown vehicle type '{0}'")]
    UnknownVehicle(String),
}

/// Failures of the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database connection failed: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("Database query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("Booking store is unavailable: {0}")]
    Unavailable(String),
}

/// Everything that can go wrong while booking a slot.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Invalid booking request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Slot must be between 1 and 10, got {0}")]
    OutOfRange(i64),

    #[error("Slot {0} is already booked!")]
    AlreadyBooked(SlotNumber),

    /// The slot was reserved in memory but the record never reached the store.
    /// The reservation is not rolled back, so the record is handed back to the caller.
    #[error("Slot {} is booked but could not be saved: {source}", .record.slot_number())]
    Persistence {
        record: BookingRecord,
        #[source]
        source: StoreError,
    },
}

impl BookingError {
    /// Returns the accepted record if the slot is held despite the error.
    pub fn accepted_record(&self) -> Option<&BookingRecord> {
        match self {
            BookingError::Persistence { record, .. } => Some(record),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
