use colored::Colorize;

use crate::domain::{MatchResult, Mode, Outcome, Role};
use crate::standings::PlayerReport;

fn highlight(text: String, outcome: Outcome) -> String {
    match outcome {
        Outcome::Win => text.green().bold().to_string(),
        Outcome::Draw => text.yellow().to_string(),
        Outcome::Loss => text,
    }
}

/// One-line description of a result, winners highlighted
pub fn format_result(result: &MatchResult) -> String {
    let [first, second] = result.sides();
    let line = match result {
        MatchResult::Single(single) => format!(
            "{} - {}",
            highlight(format!("{} {}", single.home, single.home_goals), first.outcome()),
            highlight(format!("{} {}", single.away_goals, single.away), second.outcome()),
        ),
        MatchResult::Double(double) => {
            let mut line = format!(
                "Team A ({}) {} - {} Team B ({})",
                highlight(double.team_a.join(", "), first.outcome()),
                highlight(double.team_a_goals.to_string(), first.outcome()),
                highlight(double.team_b_goals.to_string(), second.outcome()),
                highlight(double.team_b.join(", "), second.outcome()),
            );
            if !double.sitting_players.is_empty() {
                line.push_str(&format!(" [Sitting: {}]", double.sitting_players.join(", ")));
            }
            line
        }
    };

    match result.note() {
        Some(note) => format!("{} ({})", line, note),
        None => line,
    }
}

/// The full log with 1-based positions; entries of the other mode are marked
pub fn format_results(results: &[MatchResult], mode: Mode) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== Results ({} recorded, mode {}) ===\n", results.len(), mode));

    if results.is_empty() {
        report.push_str("No results yet.\n");
        return report;
    }

    for (index, result) in results.iter().enumerate() {
        let mut line = format!("{:>3}. {}", index + 1, format_result(result));
        if result.mode() != mode {
            line = format!("{} {}", line, format!("[{} result, not counted]", result.mode()).dimmed());
        }
        report.push_str(&line);
        report.push('\n');
    }

    report
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Home => "home",
        Role::Away => "away",
        Role::TeamA => "team A",
        Role::TeamB => "team B",
        Role::Sitting => "sat out",
    }
}

pub fn format_player_report(report: &PlayerReport<'_>) -> String {
    let stats = &report.stats;
    let mut text = String::new();

    text.push_str(&format!("=== {} ===\n", report.name));
    text.push_str(&format!(
        "Played {}  Won {}  Drawn {}  Lost {}  GF {}  GA {}  GD {:+}  Points {}\n",
        stats.played,
        stats.won,
        stats.drawn,
        stats.lost,
        stats.goals_for,
        stats.goals_against,
        stats.goal_difference(),
        stats.points
    ));

    if report.history.is_empty() {
        text.push_str("\nNo matches yet.\n");
        return text;
    }

    text.push_str("\nHistory:\n");
    for entry in &report.history {
        text.push_str(&format!(
            "{:>3}. [{}] {}\n",
            entry.index + 1,
            role_label(entry.role),
            format_result(entry.result)
        ));
    }

    text
}
