use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::{MatchResult, Mode, PlayerName, Team};

/// A pairing or grouping that has been scheduled but not necessarily played
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Fixture {
    Single {
        home: PlayerName,
        away: PlayerName,
    },
    Double {
        #[serde(rename = "teamA")]
        team_a: Team,
        #[serde(rename = "teamB")]
        team_b: Team,
        sitting: Vec<PlayerName>,
    },
}

impl Fixture {
    pub fn mode(&self) -> Mode {
        match self {
            Fixture::Single { .. } => Mode::OneVsOne,
            Fixture::Double { .. } => Mode::TwoVsTwo,
        }
    }

    /// Structural match against a recorded result, ignoring goals and notes
    pub fn is_played_by(&self, result: &MatchResult) -> bool {
        match (self, result) {
            (Fixture::Single { home, away }, MatchResult::Single(single)) => {
                *home == single.home && *away == single.away
            }
            (
                Fixture::Double {
                    team_a,
                    team_b,
                    sitting,
                },
                MatchResult::Double(double),
            ) => {
                same_members(team_a, &double.team_a)
                    && same_members(team_b, &double.team_b)
                    && same_members(sitting, &double.sitting_players)
            }
            _ => false,
        }
    }
}

fn same_members(left: &[PlayerName], right: &[PlayerName]) -> bool {
    let left: BTreeSet<&str> = left.iter().map(String::as_str).collect();
    let right: BTreeSet<&str> = right.iter().map(String::as_str).collect();
    left == right
}

/// Whether a fixture has a recorded result, and which one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureStatus<'a> {
    pub completed: bool,
    /// Index into the result log of the first matching result
    pub log_index: Option<usize>,
    pub matched_result: Option<&'a MatchResult>,
}

impl<'a> FixtureStatus<'a> {
    pub fn pending() -> Self {
        Self {
            completed: false,
            log_index: None,
            matched_result: None,
        }
    }

    pub fn completed(index: usize, result: &'a MatchResult) -> Self {
        Self {
            completed: true,
            log_index: Some(index),
            matched_result: Some(result),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledFixture<'a> {
    pub fixture: &'a Fixture,
    pub status: FixtureStatus<'a>,
}

/// Every fixture of a schedule with its status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleProgress<'a> {
    pub fixtures: Vec<ScheduledFixture<'a>>,
    pub completed: usize,
    pub total: usize,
}

impl ScheduleProgress<'_> {
    pub fn pending(&self) -> usize {
        self.total - self.completed
    }
}
