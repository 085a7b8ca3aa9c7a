use std::collections::HashSet;
use thiserror::Error;

use super::models::{DoubleResult, MatchResult, Mode, PlayerName, SingleResult};

/// Minimum roster size for 2v2 play
pub const PLAYERS_PER_DOUBLE: usize = 4;

/// Input rejected before it reaches the standings engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("player name cannot be empty")]
    EmptyName,
    #[error("player name '{name}' is longer than {max} characters")]
    NameTooLong { name: String, max: usize },
    #[error("player '{0}' is already on the roster")]
    DuplicatePlayer(String),
    #[error("player '{0}' is not on the roster")]
    UnknownPlayer(String),
    #[error("home and away players cannot be the same ('{0}')")]
    SamePlayer(String),
    #[error("player '{0}' is selected more than once in one match")]
    RepeatedInMatch(String),
    #[error("2v2 matches need at least 4 players on the roster, found {0}")]
    NotEnoughPlayers(usize),
    #[error("there is no result #{position} (the log has {len})")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("a {result} result cannot be recorded while the league plays {mode}")]
    ModeMismatch { result: Mode, mode: Mode },
}

/// Trims a candidate player name and checks it against the roster rules
pub fn validate_player_name(
    name: &str,
    roster: &[PlayerName],
    max_len: usize,
) -> Result<String, ValidationError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > max_len {
        return Err(ValidationError::NameTooLong {
            name: name.to_string(),
            max: max_len,
        });
    }
    if roster.iter().any(|p| p == name) {
        return Err(ValidationError::DuplicatePlayer(name.to_string()));
    }

    Ok(name.to_string())
}

pub fn validate_result(
    result: &MatchResult,
    roster: &[PlayerName],
    mode: Mode,
) -> Result<(), ValidationError> {
    if result.mode() != mode {
        return Err(ValidationError::ModeMismatch {
            result: result.mode(),
            mode,
        });
    }

    match result {
        MatchResult::Single(single) => validate_single(single, roster),
        MatchResult::Double(double) => validate_double(double, roster),
    }
}

fn validate_single(result: &SingleResult, roster: &[PlayerName]) -> Result<(), ValidationError> {
    if result.home == result.away {
        return Err(ValidationError::SamePlayer(result.home.clone()));
    }
    ensure_on_roster([&result.home, &result.away], roster)
}

fn validate_double(result: &DoubleResult, roster: &[PlayerName]) -> Result<(), ValidationError> {
    if roster.len() < PLAYERS_PER_DOUBLE {
        return Err(ValidationError::NotEnoughPlayers(roster.len()));
    }

    let everyone = result
        .team_a
        .iter()
        .chain(result.team_b.iter())
        .chain(result.sitting_players.iter());

    let mut seen = HashSet::new();
    for player in everyone.clone() {
        if !seen.insert(player.as_str()) {
            return Err(ValidationError::RepeatedInMatch(player.clone()));
        }
    }

    ensure_on_roster(everyone, roster)
}

fn ensure_on_roster<'a>(
    players: impl IntoIterator<Item = &'a PlayerName>,
    roster: &[PlayerName],
) -> Result<(), ValidationError> {
    match players.into_iter().find(|p| !roster.contains(*p)) {
        Some(missing) => Err(ValidationError::UnknownPlayer(missing.clone())),
        None => Ok(()),
    }
}

/// Converts a 1-based log position into an index into `len` entries
pub fn validate_position(position: usize, len: usize) -> Result<usize, ValidationError> {
    if position == 0 || position > len {
        return Err(ValidationError::PositionOutOfRange { position, len });
    }
    Ok(position - 1)
}
