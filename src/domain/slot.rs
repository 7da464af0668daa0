use std::fmt;
use std::str::FromStr;

use crate::error::{BookingError, ConversionError};

/// Total number of parking slots managed by a registry.
pub const SLOT_COUNT: usize = 10;

/// Slots `1..=CAR_SLOT_COUNT` are car slots, the remaining ones are bike slots.
pub const CAR_SLOT_COUNT: usize = 5;

/// Kind of vehicle a slot is laid out for, and kind of vehicle a user books with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    Car,
    Bike,
}

impl VehicleCategory {
    /// Text stored in the `vehicle` column and shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Bike => "Bike",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleCategory::Car),
            "bike" => Ok(VehicleCategory::Bike),
            _ => Err(ConversionError::UnknownVehicleCategory(s.to_string())),
        }
    }
}

/// A slot number that is known to lie in `1..=SLOT_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotNumber(u8);

impl SlotNumber {
    /// # Errors
    /// `BookingError::OutOfRange` if `number` is not in `1..=SLOT_COUNT`.
    pub fn new(number: i64) -> Result<Self, BookingError> {
        if number < 1 || number > SLOT_COUNT as i64 {
            return Err(BookingError::OutOfRange(number));
        }

        Ok(SlotNumber(number as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Zero based position inside the registry.
    pub fn index(&self) -> usize {
        usize::from(self.0) - 1
    }

    /// Category fixed by position: the first five slots take cars, the rest bikes.
    pub fn category(&self) -> VehicleCategory {
        if self.index() < CAR_SLOT_COUNT { VehicleCategory::Car } else { VehicleCategory::Bike }
    }

    /// Inverse of [`SlotNumber::index`]; callers guarantee `index < SLOT_COUNT`.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < SLOT_COUNT);
        SlotNumber(index as u8 + 1)
    }
}

impl fmt::Display for SlotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One physical parking space.
///
/// `number` and `category` never change after creation. `booked` moves from
/// `false` to `true` at most once; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub number: SlotNumber,
    pub category: VehicleCategory,
    pub booked: bool,
}

impl Slot {
    pub fn new(number: SlotNumber) -> Self {
        Slot { number, category: number.category(), booked: false }
    }

    /// Label used when listing slots, e.g. `"Car"`.
    pub fn slot_type(&self) -> &'static str {
        self.category.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_number_rejects_values_outside_range() {
        for n in [-1, 0, 11, 100] {
            assert!(matches!(SlotNumber::new(n), Err(BookingError::OutOfRange(v)) if v == n));
        }
    }

    #[test]
    fn slot_number_index_is_zero_based() {
        let first = SlotNumber::new(1).unwrap();
        let last = SlotNumber::new(10).unwrap();

        assert_eq!(first.index(), 0);
        assert_eq!(last.index(), 9);
    }

    #[test]
    fn category_boundary_between_car_and_bike() {
        assert_eq!(SlotNumber::new(5).unwrap().category(), VehicleCategory::Car);
        assert_eq!(SlotNumber::new(6).unwrap().category(), VehicleCategory::Bike);
    }

    #[test]
    fn vehicle_category_parses_case_insensitive() {
        assert_eq!("Car".parse::<VehicleCategory>(), Ok(VehicleCategory::Car));
        assert_eq!(" bike ".parse::<VehicleCategory>(), Ok(VehicleCategory::Bike));
        assert_eq!("truck".parse::<VehicleCategory>(), Err(ConversionError::UnknownVehicleCategory("truck".to_string())));
    }

    #[test]
    fn new_slot_starts_free() {
        let slot = Slot::new(SlotNumber::new(7).unwrap());
        assert!(!slot.booked);
        assert_eq!(slot.slot_type(), "Bike");
    }
}
