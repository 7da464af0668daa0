//! Row structs for the bookings table. Internal to the persistence layer.

use diesel::prelude::*;

use super::schema::bookings;
use crate::domain::booking_record::BookingRecord;

/// Insertable struct for a new booking row; `id` is assigned by SQLite.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub(crate) struct NewBookingRow<'a> {
    pub name: &'a str,
    pub vehicle: &'a str,
    pub slot: i32,
}

impl<'a> From<&'a BookingRecord> for NewBookingRow<'a> {
    fn from(record: &'a BookingRecord) -> Self {
        NewBookingRow { name: record.name(), vehicle: record.vehicle_category().as_str(), slot: i32::from(record.slot_number().get()) }
    }
}

/// Row struct for reading back from the bookings table.
#[cfg(test)]
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct BookingRow {
    pub id: i32,
    pub name: String,
    pub vehicle: String,
    pub slot: i32,
}
