use anyhow::Result;
use log::{info, warn};

use crate::config::settings::AppConfig;
use crate::domain::{LeagueState, MatchResult, Mode};
use crate::schedule::{self, Fixture, ScheduleProgress};
use crate::standings::{self, PlayerReport, StandingsRow, Zone};
use crate::storage::{self, KeyValueStore};

/// Owns the league session: loads it once, applies mutations, saves after each
pub struct LeagueService {
    config: AppConfig,
    store: Box<dyn KeyValueStore>,
    state: LeagueState,
}

impl LeagueService {
    pub fn open(config: AppConfig) -> Result<Self> {
        let store = storage::open_store(&config.storage)?;
        Self::with_store(config, store)
    }

    pub fn with_store(config: AppConfig, store: Box<dyn KeyValueStore>) -> Result<Self> {
        let state = storage::load_state(store.as_ref(), &config.roster)?;
        Ok(Self {
            config,
            store,
            state,
        })
    }

    pub fn state(&self) -> &LeagueState {
        &self.state
    }

    // --- Queries ---

    pub fn standings(&self) -> Vec<StandingsRow> {
        standings::calculate_standings(&self.state.roster, &self.state.results, self.state.mode)
    }

    pub fn standings_with_zones(&self) -> Vec<(StandingsRow, Zone)> {
        let table = self.standings();
        let zones = standings::mark_zones(&table);
        table.into_iter().zip(zones).collect()
    }

    pub fn player_report(&self, name: &str) -> PlayerReport<'_> {
        if !self.state.has_player(name) {
            warn!("{} is not on the roster, showing recorded history only", name);
        }
        standings::player_report(name, &self.state.results, self.state.mode)
    }

    pub fn fixtures(&self, rounds: usize) -> Vec<Fixture> {
        schedule::generate_fixtures(&self.state.roster, self.state.mode, rounds)
    }

    pub fn schedule_progress<'a>(&'a self, fixtures: &'a [Fixture]) -> ScheduleProgress<'a> {
        schedule::schedule_progress(fixtures, &self.state.results, self.state.mode)
    }

    // --- Mutations ---

    /// Appends a result, or replaces the one at `edit` (1-based); returns its position
    pub fn record_result(&mut self, result: MatchResult, edit: Option<usize>) -> Result<usize> {
        let position = match edit {
            Some(position) => {
                self.state.replace_result(position, result)?;
                info!("Replaced result #{}", position);
                position
            }
            None => {
                let position = self.state.record_result(result)?;
                info!("Recorded result #{}", position);
                position
            }
        };

        self.persist()?;
        Ok(position)
    }

    pub fn delete_result(&mut self, position: usize) -> Result<MatchResult> {
        let removed = self.state.delete_result(position)?;
        info!("Deleted result #{}", position);
        self.persist()?;
        Ok(removed)
    }

    pub fn clear_results(&mut self) -> Result<usize> {
        let cleared = self.state.clear_results();
        info!("Cleared {} results", cleared);
        self.persist()?;
        Ok(cleared)
    }

    pub fn add_player(&mut self, name: &str) -> Result<String> {
        let name = self
            .state
            .add_player(name, self.config.roster.max_name_length)?;
        info!("Added {} to the roster", name);
        self.persist()?;
        Ok(name)
    }

    pub fn remove_player(&mut self, name: &str) -> Result<()> {
        self.state.remove_player(name)?;
        let orphaned = self
            .state
            .results
            .iter()
            .filter(|r| r.players().contains(&name))
            .count();
        if orphaned > 0 {
            warn!("{} results still name {} and will no longer count", orphaned, name);
        }
        info!("Removed {} from the roster", name);
        self.persist()
    }

    /// Returns how many results were cleared by the rename
    pub fn rename_player(&mut self, old: &str, new: &str) -> Result<usize> {
        let cleared = self
            .state
            .rename_player(old, new, self.config.roster.max_name_length)?;
        info!("Renamed {} to {}, cleared {} results", old, new.trim(), cleared);
        self.persist()?;
        Ok(cleared)
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<bool> {
        let changed = self.state.set_mode(mode);
        if changed {
            info!("Switched league mode to {}", mode);
            self.persist()?;
        }
        Ok(changed)
    }

    fn persist(&self) -> Result<()> {
        storage::save_state(self.store.as_ref(), &self.state)
    }
}
