use crate::domain::slot::{SlotNumber, VehicleCategory};

/// An accepted reservation.
///
/// A record is only minted after its slot flipped to booked, so holding one
/// proves the slot belongs to `name`. Fields are only reachable through getters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    name: String,
    vehicle_category: VehicleCategory,
    slot_number: SlotNumber,
}

impl BookingRecord {
    pub(crate) fn new(name: String, vehicle_category: VehicleCategory, slot_number: SlotNumber) -> Self {
        Self { name, vehicle_category, slot_number }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The vehicle type the user picked. Not necessarily the slot's own category.
    pub fn vehicle_category(&self) -> VehicleCategory {
        self.vehicle_category
    }

    pub fn slot_number(&self) -> SlotNumber {
        self.slot_number
    }
}
