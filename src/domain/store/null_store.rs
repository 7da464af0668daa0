use crate::domain::booking_record::BookingRecord;
use crate::domain::store::booking_store::BookingStore;
use crate::error::StoreError;

/// Store that accepts every record and keeps none of them.
#[derive(Debug, Default)]
pub struct NullStore;

impl NullStore {
    pub fn new() -> Self {
        NullStore
    }
}

impl BookingStore for NullStore {
    fn save(&self, record: &BookingRecord) -> Result<(), StoreError> {
        log::debug!("NullStore discarding booking of slot {} for '{}'.", record.slot_number(), record.name());
        Ok(())
    }

    fn location(&self) -> String {
        "nowhere (null store)".to_string()
    }
}
