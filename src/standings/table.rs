use log::debug;
use std::collections::HashMap;

use super::types::StandingsRow;
use crate::domain::{DoubleResult, MatchResult, Mode, PlayerName, SingleResult};

/// Builds the ranked league table for `roster` from the result log.
///
/// Results of the other mode are ignored. A 1v1 result naming a player who is
/// no longer on the roster is skipped as a whole; in 2v2 each missing player is
/// skipped on their own while teammates still get credited.
pub fn calculate_standings(
    roster: &[PlayerName],
    results: &[MatchResult],
    mode: Mode,
) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = roster.iter().map(|name| StandingsRow::new(name)).collect();
    let lookup = build_lookup(roster);

    for (index, result) in results.iter().enumerate() {
        match (result, mode) {
            (MatchResult::Single(single), Mode::OneVsOne) => {
                apply_single(&mut rows, &lookup, single, index)
            }
            (MatchResult::Double(double), Mode::TwoVsTwo) => {
                apply_double(&mut rows, &lookup, double, index)
            }
            _ => {}
        }
    }

    rank_rows(&mut rows);
    rows
}

fn build_lookup(roster: &[PlayerName]) -> HashMap<&str, usize> {
    roster
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.as_str(), idx))
        .collect()
}

fn apply_single(
    rows: &mut [StandingsRow],
    lookup: &HashMap<&str, usize>,
    result: &SingleResult,
    index: usize,
) {
    let home = lookup.get(result.home.as_str());
    let away = lookup.get(result.away.as_str());

    let (Some(&home), Some(&away)) = (home, away) else {
        debug!(
            "Skipping result #{} ({} vs {}): player not on the roster",
            index + 1,
            result.home,
            result.away
        );
        return;
    };

    rows[home].stats.record(result.home_goals, result.away_goals);
    rows[away].stats.record(result.away_goals, result.home_goals);
}

fn apply_double(
    rows: &mut [StandingsRow],
    lookup: &HashMap<&str, usize>,
    result: &DoubleResult,
    index: usize,
) {
    for side in result.sides() {
        for player in side.players {
            match lookup.get(player.as_str()) {
                Some(&idx) => rows[idx].stats.record(side.goals_for, side.goals_against),
                None => debug!(
                    "Result #{}: {} is not on the roster, skipping their share",
                    index + 1,
                    player
                ),
            }
        }
    }
}

/// Stable sort, so full ties keep roster order
fn rank_rows(rows: &mut [StandingsRow]) {
    rows.sort_by(|a, b| b.ranking_key().cmp(&a.ranking_key()));
}
