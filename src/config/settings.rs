use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RosterSettings {
    pub max_name_length: usize,
    pub default_players: Vec<String>,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            max_name_length: 20,
            default_players: ["Eli", "Amit", "Idan", "Alon", "Mor"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Which durable key-value backend holds the league
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Files,
}

impl StorageBackend {
    fn from_env_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "files" | "json" => StorageBackend::Files,
            _ => StorageBackend::Sqlite,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub database_path: PathBuf,
    pub data_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            database_path: PathBuf::from("league_table.db"),
            data_dir: PathBuf::from("league_data"),
        }
    }
}

impl StorageSettings {
    /// Defaults overridden by `LEAGUE_STORAGE`, `DATABASE_PATH` and `LEAGUE_DATA_DIR`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            backend: std::env::var("LEAGUE_STORAGE")
                .map(|v| StorageBackend::from_env_value(&v))
                .unwrap_or(defaults.backend),
            database_path: std::env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            data_dir: std::env::var("LEAGUE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub roster: RosterSettings,
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster: RosterSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            roster: RosterSettings::default(),
            storage: StorageSettings::from_env(),
        }
    }
}
