use super::types::{HistoryEntry, PlayerReport, PlayerStats};
use crate::domain::{MatchResult, Mode};

/// Collects one player's stats and history from the result log.
///
/// Sitting out a 2v2 match shows up in the history but does not count as played.
pub fn player_report<'a>(player: &str, results: &'a [MatchResult], mode: Mode) -> PlayerReport<'a> {
    let mut stats = PlayerStats::default();
    let mut history = Vec::new();

    for (index, result) in results.iter().enumerate() {
        if result.mode() != mode {
            continue;
        }
        let Some(role) = result.role_of(player) else {
            continue;
        };

        if let Some(side) = result.sides().into_iter().find(|side| side.role == role) {
            stats.record(side.goals_for, side.goals_against);
        }
        history.push(HistoryEntry { index, role, result });
    }

    PlayerReport {
        name: player.to_string(),
        stats,
        history,
    }
}
