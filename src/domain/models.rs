use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Players are identified by their display name
pub type PlayerName = String;

/// Two players sharing one side of a 2v2 match
pub type Team = [PlayerName; 2];

pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;
pub const LOSS_POINTS: u32 = 0;

/// Whether the league plays 1-vs-1 or 2-vs-2 matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "1v1")]
    OneVsOne,
    #[serde(rename = "2v2")]
    TwoVsTwo,
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::OneVsOne => "1v1",
            Mode::TwoVsTwo => "2v2",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1v1" => Ok(Mode::OneVsOne),
            "2v2" => Ok(Mode::TwoVsTwo),
            other => Err(format!("unknown mode '{}', expected 1v1 or 2v2", other)),
        }
    }
}

/// Result of a match from one side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn from_goals(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Loss,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Outcome::Win => WIN_POINTS,
            Outcome::Draw => DRAW_POINTS,
            Outcome::Loss => LOSS_POINTS,
        }
    }
}

/// Where a player appears in a recorded match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Home,
    Away,
    TeamA,
    TeamB,
    Sitting,
}

/// One side of a match together with the goals it scored and conceded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side<'a> {
    pub role: Role,
    pub players: &'a [PlayerName],
    pub goals_for: u32,
    pub goals_against: u32,
}

impl Side<'_> {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_goals(self.goals_for, self.goals_against)
    }
}

/// Recorded 1v1 match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleResult {
    pub home: PlayerName,
    pub away: PlayerName,
    pub home_goals: u32,
    pub away_goals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SingleResult {
    pub fn new(home: &str, away: &str, home_goals: u32, away_goals: u32) -> Self {
        Self {
            home: home.to_string(),
            away: away.to_string(),
            home_goals,
            away_goals,
            note: None,
        }
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn sides(&self) -> [Side<'_>; 2] {
        [
            Side {
                role: Role::Home,
                players: std::slice::from_ref(&self.home),
                goals_for: self.home_goals,
                goals_against: self.away_goals,
            },
            Side {
                role: Role::Away,
                players: std::slice::from_ref(&self.away),
                goals_for: self.away_goals,
                goals_against: self.home_goals,
            },
        ]
    }

    pub fn role_of(&self, player: &str) -> Option<Role> {
        if self.home == player {
            Some(Role::Home)
        } else if self.away == player {
            Some(Role::Away)
        } else {
            None
        }
    }
}

/// Recorded 2v2 match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoubleResult {
    pub team_a: Team,
    pub team_b: Team,
    pub team_a_goals: u32,
    pub team_b_goals: u32,
    #[serde(default)]
    pub sitting_players: Vec<PlayerName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DoubleResult {
    /// Builds a result whose sitting players are every roster member not on either team
    pub fn new(
        team_a: Team,
        team_b: Team,
        team_a_goals: u32,
        team_b_goals: u32,
        roster: &[PlayerName],
    ) -> Self {
        let sitting_players = roster
            .iter()
            .filter(|p| !team_a.contains(p) && !team_b.contains(p))
            .cloned()
            .collect();

        Self {
            team_a,
            team_b,
            team_a_goals,
            team_b_goals,
            sitting_players,
            note: None,
        }
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn sides(&self) -> [Side<'_>; 2] {
        [
            Side {
                role: Role::TeamA,
                players: &self.team_a,
                goals_for: self.team_a_goals,
                goals_against: self.team_b_goals,
            },
            Side {
                role: Role::TeamB,
                players: &self.team_b,
                goals_for: self.team_b_goals,
                goals_against: self.team_a_goals,
            },
        ]
    }

    pub fn role_of(&self, player: &str) -> Option<Role> {
        if self.team_a.iter().any(|p| p == player) {
            Some(Role::TeamA)
        } else if self.team_b.iter().any(|p| p == player) {
            Some(Role::TeamB)
        } else if self.sitting_players.iter().any(|p| p == player) {
            Some(Role::Sitting)
        } else {
            None
        }
    }
}

/// A recorded match in either shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchResult {
    Single(SingleResult),
    Double(DoubleResult),
}

impl MatchResult {
    /// The mode this result was recorded under
    pub fn mode(&self) -> Mode {
        match self {
            MatchResult::Single(_) => Mode::OneVsOne,
            MatchResult::Double(_) => Mode::TwoVsTwo,
        }
    }

    pub fn sides(&self) -> [Side<'_>; 2] {
        match self {
            MatchResult::Single(single) => single.sides(),
            MatchResult::Double(double) => double.sides(),
        }
    }

    pub fn role_of(&self, player: &str) -> Option<Role> {
        match self {
            MatchResult::Single(single) => single.role_of(player),
            MatchResult::Double(double) => double.role_of(player),
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            MatchResult::Single(single) => single.note.as_deref(),
            MatchResult::Double(double) => double.note.as_deref(),
        }
    }

    /// Every player named by this result, sitting players included
    pub fn players(&self) -> Vec<&str> {
        match self {
            MatchResult::Single(single) => vec![single.home.as_str(), single.away.as_str()],
            MatchResult::Double(double) => double
                .team_a
                .iter()
                .chain(double.team_b.iter())
                .chain(double.sitting_players.iter())
                .map(String::as_str)
                .collect(),
        }
    }
}

impl From<SingleResult> for MatchResult {
    fn from(result: SingleResult) -> Self {
        MatchResult::Single(result)
    }
}

impl From<DoubleResult> for MatchResult {
    fn from(result: DoubleResult) -> Self {
        MatchResult::Double(result)
    }
}
