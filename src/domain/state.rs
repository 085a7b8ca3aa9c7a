use serde::{Deserialize, Serialize};

use super::models::{MatchResult, Mode, PlayerName};
use super::validation::{self, ValidationError};

/// Session-wide league data: who plays, what was played, and how
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeagueState {
    pub roster: Vec<PlayerName>,
    pub results: Vec<MatchResult>,
    pub mode: Mode,
}

impl LeagueState {
    pub fn has_player(&self, name: &str) -> bool {
        self.roster.iter().any(|p| p == name)
    }

    /// Appends a result and returns its 1-based position in the log
    pub fn record_result(&mut self, result: MatchResult) -> Result<usize, ValidationError> {
        validation::validate_result(&result, &self.roster, self.mode)?;
        self.results.push(result);
        Ok(self.results.len())
    }

    /// Replaces the result at a 1-based position, returning the old entry
    pub fn replace_result(
        &mut self,
        position: usize,
        result: MatchResult,
    ) -> Result<MatchResult, ValidationError> {
        let index = validation::validate_position(position, self.results.len())?;
        validation::validate_result(&result, &self.roster, self.mode)?;
        Ok(std::mem::replace(&mut self.results[index], result))
    }

    pub fn delete_result(&mut self, position: usize) -> Result<MatchResult, ValidationError> {
        let index = validation::validate_position(position, self.results.len())?;
        Ok(self.results.remove(index))
    }

    /// Empties the log and returns how many results were dropped
    pub fn clear_results(&mut self) -> usize {
        let cleared = self.results.len();
        self.results.clear();
        cleared
    }

    pub fn add_player(&mut self, name: &str, max_len: usize) -> Result<String, ValidationError> {
        let name = validation::validate_player_name(name, &self.roster, max_len)?;
        self.roster.push(name.clone());
        Ok(name)
    }

    /// Removes a player; results naming them stay in the log as orphans
    pub fn remove_player(&mut self, name: &str) -> Result<(), ValidationError> {
        let index = self.position_of(name)?;
        self.roster.remove(index);
        Ok(())
    }

    /// Renames a player in place. Any rename invalidates the whole log,
    /// so the number of cleared results is returned.
    pub fn rename_player(
        &mut self,
        old: &str,
        new: &str,
        max_len: usize,
    ) -> Result<usize, ValidationError> {
        let index = self.position_of(old)?;
        if new.trim() == old {
            return Ok(0);
        }

        let new = validation::validate_player_name(new, &self.roster, max_len)?;
        self.roster[index] = new;
        Ok(self.clear_results())
    }

    /// Switches the mode; existing results are kept but only those of the new shape count
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    fn position_of(&self, name: &str) -> Result<usize, ValidationError> {
        self.roster
            .iter()
            .position(|p| p == name)
            .ok_or_else(|| ValidationError::UnknownPlayer(name.to_string()))
    }
}
