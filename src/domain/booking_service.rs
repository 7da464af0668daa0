use std::str::FromStr;
use std::sync::Arc;

use crate::domain::booking_record::BookingRecord;
use crate::domain::slot::{SlotNumber, VehicleCategory};
use crate::domain::slot_registry::SlotRegistry;
use crate::domain::store::booking_store::BookingStore;
use crate::error::{BookingError, ValidationError};

/// Validates booking requests and coordinates the registry with the store.
///
/// Both collaborators are injected, so one registry can be shared by several
/// front ends and tests can swap the store.
#[derive(Debug, Clone)]
pub struct BookingService {
    registry: Arc<SlotRegistry>,
    store: Arc<dyn BookingStore>,
}

impl BookingService {
    pub fn new(registry: Arc<SlotRegistry>, store: Arc<dyn BookingStore>) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    pub fn store(&self) -> &dyn BookingStore {
        self.store.as_ref()
    }

    /// Books `slot_number` for `name`.
    ///
    /// The vehicle category is recorded as given; it is not compared with the
    /// slot's own category.
    ///
    /// # Errors
    /// - `Validation(EmptyName)` if `name` is blank.
    /// - `Validation(SlotOutOfRange)` if `slot_number` is not in `1..=10`.
    /// - `AlreadyBooked` if somebody else holds the slot.
    /// - `Persistence` if the store rejected the record. The slot stays booked
    ///   and the record is carried inside the error.
    pub fn book(&self, name: &str, vehicle_category: VehicleCategory, slot_number: i64) -> Result<BookingRecord, BookingError> {
        let name = name.trim();
        if name.is_empty() {
            log::info!("Booking rejected: empty name.");
            return Err(ValidationError::EmptyName.into());
        }

        let slot = SlotNumber::new(slot_number).map_err(|_| {
            log::info!("Booking rejected: slot {} out of range.", slot_number);
            ValidationError::SlotOutOfRange
        })?;

        if let Err(e) = self.registry.reserve(slot_number) {
            log::info!("Booking of slot {} for '{}' rejected: {}", slot, name, e);
            return Err(e);
        }

        let record = BookingRecord::new(name.to_string(), vehicle_category, slot);
        log::info!("Slot {} booked for '{}' ({}).", slot, name, vehicle_category);

        if let Err(source) = self.store.save(&record) {
            log::warn!("Slot {} stays booked for '{}' but the booking was not saved: {}", slot, name, source);
            return Err(BookingError::Persistence { record, source });
        }

        Ok(record)
    }

    /// Books from raw presentation input.
    ///
    /// A slot text that is not an integer is treated the same way as an
    /// integer outside `1..=10`. Checks run in the order name, slot, vehicle.
    pub fn book_from_input(&self, name: &str, vehicle_text: &str, slot_text: &str) -> Result<BookingRecord, BookingError> {
        if name.trim().is_empty() {
            log::info!("Booking rejected: empty name.");
            return Err(ValidationError::EmptyName.into());
        }

        let slot_number = match slot_text.trim().parse::<i64>() {
            Ok(number) if SlotNumber::new(number).is_ok() => number,
            _ => {
                log::info!("Booking rejected: slot input '{}' is not a number in 1..=10.", slot_text.trim());
                return Err(ValidationError::SlotOutOfRange.into());
            }
        };

        let vehicle_category =
            VehicleCategory::from_str(vehicle_text).map_err(|_| ValidationError::UnknownVehicle(vehicle_text.trim().to_string()))?;

        self.book(name, vehicle_category, slot_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::null_store::NullStore;
    use crate::error::StoreError;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingStore {
        saved: Mutex<Vec<BookingRecord>>,
    }

    impl BookingStore for RecordingStore {
        fn save(&self, record: &BookingRecord) -> Result<(), StoreError> {
            self.saved.lock().unwrap().push(record.clone());
            Ok(())
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }

    #[derive(Debug)]
    struct BrokenStore;

    impl BookingStore for BrokenStore {
        fn save(&self, _record: &BookingRecord) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk full".to_string()))
        }

        fn location(&self) -> String {
            "broken".to_string()
        }
    }

    fn service_with(store: Arc<dyn BookingStore>) -> BookingService {
        BookingService::new(Arc::new(SlotRegistry::new()), store)
    }

    fn booked_slots(service: &BookingService) -> Vec<u8> {
        service.registry().snapshot().iter().filter(|s| s.booked).map(|s| s.number.get()).collect()
    }

    #[test]
    fn successful_booking_is_saved_once() {
        let store = Arc::new(RecordingStore::default());
        let service = service_with(store.clone());

        let record = service.book("Alice", VehicleCategory::Car, 1).unwrap();

        assert_eq!(record.name(), "Alice");
        assert_eq!(record.vehicle_category(), VehicleCategory::Car);
        assert_eq!(record.slot_number().get(), 1);
        assert!(service.registry().get_slot(1).unwrap().booked);
        assert_eq!(*store.saved.lock().unwrap(), vec![record]);
    }

    #[test]
    fn name_is_trimmed() {
        let service = service_with(Arc::new(NullStore::new()));
        let record = service.book("  Bob \t", VehicleCategory::Bike, 6).unwrap();

        assert_eq!(record.name(), "Bob");
    }

    #[test]
    fn blank_name_changes_nothing() {
        let store = Arc::new(RecordingStore::default());
        let service = service_with(store.clone());

        for name in ["", "   "] {
            let err = service.book(name, VehicleCategory::Car, 3).unwrap_err();
            assert!(matches!(err, BookingError::Validation(ValidationError::EmptyName)));
        }

        assert!(booked_slots(&service).is_empty());
        assert!(store.saved.lock().unwrap().is_empty());
    }

    #[test]
    fn out_of_range_slot_is_a_validation_error() {
        let service = service_with(Arc::new(NullStore::new()));

        for slot in [0, 11, -4] {
            let err = service.book("Alice", VehicleCategory::Bike, slot).unwrap_err();
            assert!(matches!(err, BookingError::Validation(ValidationError::SlotOutOfRange)));
            assert_eq!(err.to_string(), "Invalid booking request: slot out of range");
        }
        assert!(booked_slots(&service).is_empty());
    }

    #[test]
    fn double_booking_is_rejected_and_saved_once() {
        let store = Arc::new(RecordingStore::default());
        let service = service_with(store.clone());

        service.book("Alice", VehicleCategory::Car, 2).unwrap();
        let err = service.book("Bob", VehicleCategory::Car, 2).unwrap_err();

        assert!(matches!(err, BookingError::AlreadyBooked(n) if n.get() == 2));
        assert_eq!(store.saved.lock().unwrap().len(), 1);
    }

    #[test]
    fn vehicle_category_is_not_checked_against_slot() {
        let service = service_with(Arc::new(NullStore::new()));

        let record = service.book("Erin", VehicleCategory::Bike, 1).unwrap();

        assert_eq!(record.vehicle_category(), VehicleCategory::Bike);
        assert_eq!(service.registry().get_slot(1).unwrap().category, VehicleCategory::Car);
    }

    #[test]
    fn failed_save_keeps_reservation() {
        let service = service_with(Arc::new(BrokenStore));

        let err = service.book("Frank", VehicleCategory::Car, 4).unwrap_err();

        let record = err.accepted_record().expect("record should be carried by persistence error");
        assert_eq!(record.slot_number().get(), 4);
        assert!(matches!(err, BookingError::Persistence { source: StoreError::Unavailable(_), .. }));
        assert!(service.registry().get_slot(4).unwrap().booked);
        assert!(matches!(service.book("Grace", VehicleCategory::Car, 4), Err(BookingError::AlreadyBooked(_))));
    }

    #[test]
    fn raw_input_is_parsed() {
        let service = service_with(Arc::new(NullStore::new()));

        let record = service.book_from_input("Heidi", "bike", " 9 ").unwrap();

        assert_eq!(record.vehicle_category(), VehicleCategory::Bike);
        assert_eq!(record.slot_number().get(), 9);
    }

    #[test]
    fn non_numeric_slot_is_same_failure_as_out_of_range() {
        let service = service_with(Arc::new(NullStore::new()));

        for text in ["abc", "", "3.5", "99999999999999999999"] {
            let err = service.book_from_input("Ivan", "Car", text).unwrap_err();
            assert!(matches!(err, BookingError::Validation(ValidationError::SlotOutOfRange)), "input {:?}", text);
        }
        assert!(booked_slots(&service).is_empty());
    }

    #[test]
    fn empty_name_wins_over_bad_slot_text() {
        let service = service_with(Arc::new(NullStore::new()));

        let err = service.book_from_input(" ", "Car", "x").unwrap_err();
        assert!(matches!(err, BookingError::Validation(ValidationError::EmptyName)));
    }

    #[test]
    fn unknown_vehicle_text_is_rejected() {
        let service = service_with(Arc::new(NullStore::new()));

        let err = service.book_from_input("Judy", "Truck", "1").unwrap_err();
        assert!(matches!(err, BookingError::Validation(ValidationError::UnknownVehicle(ref v)) if v == "Truck"));
        assert!(booked_slots(&service).is_empty());
    }
}
