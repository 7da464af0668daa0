use std::str::FromStr;
use std::sync::Arc;

use crate::domain::config::BookingConfig;
use crate::domain::store::booking_store::BookingStore;
use crate::domain::store::null_store::NullStore;
use crate::error::{ConversionError, StoreError};
use crate::persistence::sqlite_booking_store::SqliteBookingStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    Sqlite,
    Null,
}

impl StoreType {
    /// Builds the concrete store selected by the configuration.
    pub fn get_instance(&self, config: &BookingConfig) -> Result<Arc<dyn BookingStore>, StoreError> {
        match self {
            StoreType::Sqlite => {
                let store = SqliteBookingStore::open(&config.database_path)?;
                Ok(Arc::new(store))
            }
            StoreType::Null => Ok(Arc::new(NullStore::new())),
        }
    }
}

impl FromStr for StoreType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sqlite" | "sqlite" => Ok(StoreType::Sqlite),
            "Null" | "null" => Ok(StoreType::Null),
            _ => Err(ConversionError::UnknownStoreType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_store_types() {
        assert_eq!(StoreType::from_str("Sqlite"), Ok(StoreType::Sqlite));
        assert_eq!(StoreType::from_str("null"), Ok(StoreType::Null));
    }

    #[test]
    fn rejects_unknown_store_type() {
        assert_eq!(StoreType::from_str("Postgres"), Err(ConversionError::UnknownStoreType("Postgres".to_string())));
    }
}
