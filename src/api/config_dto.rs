use serde::Deserialize;

fn default_database_path() -> String {
    "parking.db".to_string()
}

fn default_store_typ() -> String {
    "Sqlite".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSystemDto {
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_store_typ")]
    pub store_typ: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for BookingSystemDto {
    fn default() -> Self {
        Self { database_path: default_database_path(), store_typ: default_store_typ(), log_dir: default_log_dir() }
    }
}
