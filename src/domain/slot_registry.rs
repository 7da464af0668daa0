use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::slot::{SLOT_COUNT, Slot, SlotNumber, VehicleCategory};
use crate::error::BookingError;

/// Owns the ten parking slots and their booked state.
///
/// All slots live behind one lock. `reserve` holds it only for the
/// check-and-flip, so two callers racing for the same slot can never both win.
#[derive(Debug)]
pub struct SlotRegistry {
    slots: Mutex<[Slot; SLOT_COUNT]>,
}

impl SlotRegistry {
    /// Creates the ten slots in fixed order: 1-5 car, 6-10 bike, all free.
    pub fn new() -> Self {
        let slots: [Slot; SLOT_COUNT] = std::array::from_fn(|index| Slot::new(SlotNumber::from_index(index)));

        log::debug!("Slot registry initialized with {} slots.", SLOT_COUNT);

        Self { slots: Mutex::new(slots) }
    }

    // The flip is a single assignment, so a poisoned guard still holds consistent state.
    fn lock(&self) -> MutexGuard<'_, [Slot; SLOT_COUNT]> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the slot with the given number.
    ///
    /// # Errors
    /// `BookingError::OutOfRange` if `number` is not in `1..=10`.
    pub fn get_slot(&self, number: i64) -> Result<Slot, BookingError> {
        let number = SlotNumber::new(number)?;
        Ok(self.lock()[number.index()])
    }

    /// Marks the slot as booked.
    ///
    /// # Errors
    /// - `BookingError::OutOfRange` if `number` is not in `1..=10`.
    /// - `BookingError::AlreadyBooked` if the slot was booked before.
    pub fn reserve(&self, number: i64) -> Result<(), BookingError> {
        let number = SlotNumber::new(number)?;
        let mut slots = self.lock();
        let slot = &mut slots[number.index()];

        if slot.booked {
            return Err(BookingError::AlreadyBooked(number));
        }

        slot.booked = true;
        Ok(())
    }

    /// Copy of all slots in registry order.
    pub fn snapshot(&self) -> Vec<Slot> {
        self.lock().to_vec()
    }

    /// Numbers of the slots of `category` that are still free.
    pub fn free_slots(&self, category: VehicleCategory) -> Vec<SlotNumber> {
        self.lock().iter().filter(|slot| slot.category == category && !slot.booked).map(|slot| slot.number).collect()
    }
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self::new()
    }
}
