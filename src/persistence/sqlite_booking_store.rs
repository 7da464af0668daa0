use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use std::fmt;
use std::sync::Mutex;

use super::models::NewBookingRow;
use super::schema::bookings;
use crate::domain::booking_record::BookingRecord;
use crate::domain::store::booking_store::BookingStore;
use crate::error::StoreError;

const CREATE_BOOKINGS_TABLE: &str = "CREATE TABLE IF NOT EXISTS bookings (\
    id INTEGER PRIMARY KEY AUTOINCREMENT,\
    name TEXT NOT NULL,\
    vehicle TEXT NOT NULL,\
    slot INTEGER NOT NULL)";

/// Appends bookings to the `bookings` table of a local SQLite file.
///
/// The connection is shared behind a mutex, so concurrent `save` calls are
/// written one after another.
pub struct SqliteBookingStore {
    database_path: String,
    connection: Mutex<SqliteConnection>,
}

impl SqliteBookingStore {
    /// Opens (or creates) the database file and makes sure the bookings table exists.
    pub fn open(database_path: &str) -> Result<Self, StoreError> {
        let mut connection = SqliteConnection::establish(database_path)?;
        log::info!("Database connected: '{}'.", database_path);

        connection.batch_execute(CREATE_BOOKINGS_TABLE)?;
        log::debug!("Table 'bookings' is present in '{}'.", database_path);

        Ok(Self { database_path: database_path.to_string(), connection: Mutex::new(connection) })
    }
}

impl fmt::Debug for SqliteBookingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteBookingStore").field("database_path", &self.database_path).finish_non_exhaustive()
    }
}

impl BookingStore for SqliteBookingStore {
    fn save(&self, record: &BookingRecord) -> Result<(), StoreError> {
        let row = NewBookingRow::from(record);
        let mut connection = self.connection.lock().map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))?;

        diesel::insert_into(bookings::table).values(&row).execute(&mut *connection)?;

        log::debug!("Inserted booking of slot {} into '{}'.", row.slot, self.database_path);
        Ok(())
    }

    fn location(&self) -> String {
        self.database_path.clone()
    }
}
