use colored::Colorize;

use crate::domain::Mode;
use crate::standings::{StandingsRow, Zone};

/// Formats the league table, leaders in green and the bottom in red
pub fn format_standings(rows: &[(StandingsRow, Zone)], mode: Mode) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== Standings ({}) ===\n\n", mode));
    report.push_str(&format!(
        "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}\n",
        "#", "Player", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    ));
    report.push_str(&"-".repeat(64));
    report.push('\n');

    for (rank, (row, zone)) in rows.iter().enumerate() {
        let line = format!(
            "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}",
            rank + 1,
            row.name,
            row.stats.played,
            row.stats.won,
            row.stats.drawn,
            row.stats.lost,
            row.stats.goals_for,
            row.stats.goals_against,
            row.goal_difference(),
            row.stats.points
        );

        let line = match zone {
            Zone::Leader => line.green().bold().to_string(),
            Zone::Bottom => line.red().to_string(),
            Zone::Middle => line,
        };
        report.push_str(&line);
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::mark_zones;

    #[test]
    fn test_standings_lines() {
        colored::control::set_override(false);

        let mut leader = StandingsRow::new("Eli");
        leader.stats.record(3, 1);
        let mut trailer = StandingsRow::new("Amit");
        trailer.stats.record(1, 3);
        let table = vec![leader, trailer];
        let zones = mark_zones(&table);
        let rows: Vec<(StandingsRow, Zone)> = table.into_iter().zip(zones).collect();

        let text = format_standings(&rows, Mode::OneVsOne);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=== Standings (1v1) ===");
        assert!(lines[4].starts_with("  1  Eli"));
        assert!(lines[4].ends_with("+2    3"));
        assert!(lines[5].starts_with("  2  Amit"));
        assert!(lines[5].ends_with("-2    0"));
    }
}
