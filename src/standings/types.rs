use serde::Serialize;

use crate::domain::{MatchResult, Outcome, PlayerName, Role};

/// Aggregated match statistics for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub points: u64,
}

impl PlayerStats {
    /// Adds one match played from this player's side
    pub fn record(&mut self, goals_for: u32, goals_against: u32) {
        let outcome = Outcome::from_goals(goals_for, goals_against);

        self.played += 1;
        self.goals_for += u64::from(goals_for);
        self.goals_against += u64::from(goals_against);
        self.points += u64::from(outcome.points());

        match outcome {
            Outcome::Win => self.won += 1,
            Outcome::Draw => self.drawn += 1,
            Outcome::Loss => self.lost += 1,
        }
    }

    /// Saturates at the `i64` bounds
    pub fn goal_difference(&self) -> i64 {
        let difference = i128::from(self.goals_for) - i128::from(self.goals_against);
        i64::try_from(difference).unwrap_or(if difference > 0 { i64::MAX } else { i64::MIN })
    }
}

/// One line of the league table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StandingsRow {
    pub name: PlayerName,
    #[serde(flatten)]
    pub stats: PlayerStats,
}

impl StandingsRow {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stats: PlayerStats::default(),
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.stats.goal_difference()
    }

    /// Points, then goal difference, then goals scored
    pub fn ranking_key(&self) -> (u64, i64, u64) {
        (self.stats.points, self.goal_difference(), self.stats.goals_for)
    }
}

/// Highlight band of a standings row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Leader,
    Middle,
    Bottom,
}

/// A result the player took part in, with their role in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry<'a> {
    /// Index into the result log
    pub index: usize,
    pub role: Role,
    pub result: &'a MatchResult,
}

/// Aggregate stats and match history for a single player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerReport<'a> {
    pub name: PlayerName,
    pub stats: PlayerStats,
    pub history: Vec<HistoryEntry<'a>>,
}
