use serde::de::DeserializeOwned;
use std::fs;

use crate::api::config_dto::BookingSystemDto;
use crate::domain::config::BookingConfig;
use crate::error::{Error, Result};

/// Parses a JSON file into a given type `T`.
///
/// Errors are automatically converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path)?;
    let parsed_data: T = serde_json::from_str(&data)?;

    Ok(parsed_data)
}

/// Loads the booking configuration from `file_path`, or the defaults when no file is given.
pub fn load_config(file_path: Option<&str>) -> Result<BookingConfig> {
    let dto = match file_path {
        Some(path) => parse_json_file::<BookingSystemDto>(path)?,
        None => BookingSystemDto::default(),
    };

    BookingConfig::try_from(dto).map_err(Error::from)
}
