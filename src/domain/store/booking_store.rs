use crate::domain::booking_record::BookingRecord;
use crate::error::StoreError;

/// Durable sink for accepted bookings.
///
/// Implementations only ever append; a record handed to `save` is never
/// updated or deleted afterwards.
pub trait BookingStore: std::fmt::Debug + Send + Sync {
    fn save(&self, record: &BookingRecord) -> Result<(), StoreError>;

    /// Human readable location of the stored data, shown in confirmations.
    fn location(&self) -> String;
}
