use super::types::{StandingsRow, Zone};

/// Tags each ranked row as leader, bottom, or neither.
///
/// Rows level with the last row on every tie-breaker are `Bottom`; the rest
/// that are level with the first row are `Leader`. When the whole table is
/// level everybody is `Bottom`.
pub fn mark_zones(table: &[StandingsRow]) -> Vec<Zone> {
    let (Some(first), Some(last)) = (table.first(), table.last()) else {
        return Vec::new();
    };
    let leader_key = first.ranking_key();
    let bottom_key = last.ranking_key();

    table
        .iter()
        .map(|row| {
            let key = row.ranking_key();
            if key == bottom_key {
                Zone::Bottom
            } else if key == leader_key {
                Zone::Leader
            } else {
                Zone::Middle
            }
        })
        .collect()
}
