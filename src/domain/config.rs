use std::str::FromStr;

use crate::api::config_dto::BookingSystemDto;
use crate::domain::store::store_type::StoreType;
use crate::error::ConversionError;

/// Runtime settings of the booking system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfig {
    /// SQLite file the bookings table lives in.
    pub database_path: String,
    pub store_type: StoreType,
    /// Directory receiving `parking.log`.
    pub log_dir: String,
}

impl TryFrom<BookingSystemDto> for BookingConfig {
    type Error = ConversionError;

    fn try_from(dto: BookingSystemDto) -> Result<Self, Self::Error> {
        let store_type = StoreType::from_str(&dto.store_typ)?;

        if store_type == StoreType::Sqlite && dto.database_path.trim().is_empty() {
            return Err(ConversionError::EmptyDatabasePath);
        }

        Ok(BookingConfig { database_path: dto.database_path, store_type, log_dir: dto.log_dir })
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig { database_path: "parking.db".to_string(), store_type: StoreType::Sqlite, log_dir: "logs".to_string() }
    }
}
