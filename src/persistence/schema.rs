//! Diesel table definition for the SQLite bookings table.
//!
//! Must match `CREATE_BOOKINGS_TABLE` in the store exactly.

diesel::table! {
    /// One row per accepted booking. Rows are only ever inserted.
    bookings (id) {
        id -> Integer,
        name -> Text,
        /// `"Car"` or `"Bike"`.
        vehicle -> Text,
        /// Slot number in `1..=10`.
        slot -> Integer,
    }
}
