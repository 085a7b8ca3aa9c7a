use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::FileStore;
use crate::config::{RosterSettings, StorageBackend, StorageSettings};
use crate::database::SqliteStore;
use crate::domain::{LeagueState, MatchResult, Mode, PlayerName};

pub const PLAYERS_KEY: &str = "players";
pub const RESULTS_KEY: &str = "results";
pub const MODE_KEY: &str = "gameMode";

/// Durable storage of JSON text under string keys
pub trait KeyValueStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>>;
    fn save_raw(&self, key: &str, value: &str) -> Result<()>;

    /// Saves several values together; backends with transactions apply all or none
    fn save_batch(&self, values: &[(&str, String)]) -> Result<()> {
        for (key, value) in values {
            self.save_raw(key, value)?;
        }
        Ok(())
    }
}

pub fn open_store(settings: &StorageSettings) -> Result<Box<dyn KeyValueStore>> {
    match settings.backend {
        StorageBackend::Sqlite => {
            info!("Using SQLite store at {}", settings.database_path.display());
            Ok(Box::new(SqliteStore::open(&settings.database_path)?))
        }
        StorageBackend::Files => {
            info!("Using JSON file store in {}", settings.data_dir.display());
            Ok(Box::new(FileStore::new(&settings.data_dir)?))
        }
    }
}

pub fn load_value<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.load_raw(key)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .with_context(|| format!("Failed to parse stored value for key: {}", key)),
        None => Ok(None),
    }
}

fn to_json<T: Serialize>(key: &str, value: &T) -> Result<String> {
    serde_json::to_string(value).with_context(|| format!("Failed to serialize value for key: {}", key))
}

/// Reads the three league values, falling back to defaults for missing keys
pub fn load_state(store: &dyn KeyValueStore, roster: &RosterSettings) -> Result<LeagueState> {
    let players: Vec<PlayerName> =
        load_value(store, PLAYERS_KEY)?.unwrap_or_else(|| roster.default_players.clone());
    let results: Vec<MatchResult> = load_value(store, RESULTS_KEY)?.unwrap_or_default();
    let mode: Mode = load_value(store, MODE_KEY)?.unwrap_or_default();

    info!(
        "Loaded league: {} players, {} results, mode {}",
        players.len(),
        results.len(),
        mode
    );

    Ok(LeagueState {
        roster: players,
        results,
        mode,
    })
}

/// Writes roster, results and mode as one batch
pub fn save_state(store: &dyn KeyValueStore, state: &LeagueState) -> Result<()> {
    let entries = [
        (PLAYERS_KEY, to_json(PLAYERS_KEY, &state.roster)?),
        (RESULTS_KEY, to_json(RESULTS_KEY, &state.results)?),
        (MODE_KEY, to_json(MODE_KEY, &state.mode)?),
    ];
    store.save_batch(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SingleResult;
    use tempfile::TempDir;

    fn stores(dir: &TempDir) -> Vec<Box<dyn KeyValueStore>> {
        vec![
            Box::new(SqliteStore::open(&dir.path().join("league.db")).unwrap()),
            Box::new(FileStore::new(dir.path().join("files")).unwrap()),
        ]
    }

    #[test]
    fn test_missing_keys_give_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = RosterSettings::default();

        for store in stores(&dir) {
            let state = load_state(store.as_ref(), &settings).unwrap();
            assert_eq!(state.roster, settings.default_players);
            assert!(state.results.is_empty());
            assert_eq!(state.mode, Mode::OneVsOne);
        }
    }

    #[test]
    fn test_state_survives_a_reload() {
        let dir = TempDir::new().unwrap();
        let settings = RosterSettings::default();

        for store in stores(&dir) {
            let mut state = load_state(store.as_ref(), &settings).unwrap();
            state
                .record_result(SingleResult::new("Eli", "Amit", 3, 1).with_note(Some("opener".into())).into())
                .unwrap();
            state.set_mode(Mode::TwoVsTwo);
            save_state(store.as_ref(), &state).unwrap();

            let reloaded = load_state(store.as_ref(), &settings).unwrap();
            assert_eq!(reloaded, state);
        }
    }

    #[test]
    fn test_values_use_stable_keys() {
        let dir = TempDir::new().unwrap();

        for store in stores(&dir) {
            let state = LeagueState {
                roster: vec!["Eli".into(), "Amit".into()],
                mode: Mode::TwoVsTwo,
                ..LeagueState::default()
            };
            save_state(store.as_ref(), &state).unwrap();

            assert_eq!(store.load_raw("gameMode").unwrap().as_deref(), Some("\"2v2\""));
            assert_eq!(store.load_raw("players").unwrap().as_deref(), Some(r#"["Eli","Amit"]"#));
            assert_eq!(store.load_raw("results").unwrap().as_deref(), Some("[]"));
        }
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let dir = TempDir::new().unwrap();

        for store in stores(&dir) {
            store.save_raw(RESULTS_KEY, "not json").unwrap();
            let loaded: Result<Option<Vec<MatchResult>>> = load_value(store.as_ref(), RESULTS_KEY);
            assert!(loaded.is_err());
        }
    }
}
