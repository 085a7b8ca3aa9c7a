use super::types::Fixture;
use crate::domain::{Mode, PlayerName};

const GROUP_SIZE: usize = 4;

/// The three ways of splitting a group of four into two pairs
const SPLITS: [([usize; 2], [usize; 2]); 3] = [([0, 1], [2, 3]), ([0, 2], [1, 3]), ([0, 3], [1, 2])];

/// Generates the fixture list for the roster.
///
/// 1v1 pairs every two players once, earlier roster entry at home; `rounds` is
/// ignored. 2v2 walks every group of four in roster order and emits its three
/// splits, with everyone outside the group sitting out. A roster of exactly
/// four has a single group, so its splits are repeated `rounds` times instead.
pub fn generate_fixtures(roster: &[PlayerName], mode: Mode, rounds: usize) -> Vec<Fixture> {
    match mode {
        Mode::OneVsOne => round_robin_pairs(roster),
        Mode::TwoVsTwo if roster.len() == GROUP_SIZE => repeated_splits(roster, rounds),
        Mode::TwoVsTwo => group_splits(roster),
    }
}

fn round_robin_pairs(roster: &[PlayerName]) -> Vec<Fixture> {
    roster
        .iter()
        .enumerate()
        .flat_map(|(idx, home)| {
            roster[idx + 1..].iter().map(move |away| Fixture::Single {
                home: home.clone(),
                away: away.clone(),
            })
        })
        .collect()
}

fn repeated_splits(roster: &[PlayerName], rounds: usize) -> Vec<Fixture> {
    let round = splits_for_group(roster, [0, 1, 2, 3]);
    (0..rounds).flat_map(|_| round.iter().cloned()).collect()
}

fn group_splits(roster: &[PlayerName]) -> Vec<Fixture> {
    groups_of_four(roster.len())
        .into_iter()
        .flat_map(|group| splits_for_group(roster, group))
        .collect()
}

/// Index combinations of size four in lexicographic order
fn groups_of_four(len: usize) -> Vec<[usize; GROUP_SIZE]> {
    let mut groups = Vec::new();
    for a in 0..len {
        for b in a + 1..len {
            for c in b + 1..len {
                for d in c + 1..len {
                    groups.push([a, b, c, d]);
                }
            }
        }
    }
    groups
}

fn splits_for_group(roster: &[PlayerName], group: [usize; GROUP_SIZE]) -> Vec<Fixture> {
    let sitting: Vec<PlayerName> = roster
        .iter()
        .enumerate()
        .filter(|(idx, _)| !group.contains(idx))
        .map(|(_, name)| name.clone())
        .collect();
    let pick = |pair: [usize; 2]| [roster[group[pair[0]]].clone(), roster[group[pair[1]]].clone()];

    SPLITS
        .iter()
        .map(|&(team_a, team_b)| Fixture::Double {
            team_a: pick(team_a),
            team_b: pick(team_b),
            sitting: sitting.clone(),
        })
        .collect()
}
