use colored::Colorize;

use crate::schedule::{Fixture, ScheduleProgress};

pub fn format_fixture(fixture: &Fixture) -> String {
    match fixture {
        Fixture::Single { home, away } => format!("{} vs {}", home, away),
        Fixture::Double {
            team_a,
            team_b,
            sitting,
        } if sitting.is_empty() => format!("{} vs {}", team_a.join(" & "), team_b.join(" & ")),
        Fixture::Double {
            team_a,
            team_b,
            sitting,
        } => format!(
            "{} vs {} (sitting: {})",
            team_a.join(" & "),
            team_b.join(" & "),
            sitting.join(", ")
        ),
    }
}

/// Fixture list with a played/pending marker per line and a summary
pub fn format_schedule(progress: &ScheduleProgress<'_>) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "=== Fixtures: {} of {} played ===\n",
        progress.completed, progress.total
    ));

    if progress.total == 0 {
        report.push_str("Not enough players to schedule any fixtures.\n");
        return report;
    }

    for (idx, scheduled) in progress.fixtures.iter().enumerate() {
        let fixture = format_fixture(scheduled.fixture);
        let line = match scheduled.status.log_index {
            Some(log_index) => format!(
                "{:>3}. {} {}",
                idx + 1,
                "[played]".green(),
                format!("{} (result #{})", fixture, log_index + 1).dimmed()
            ),
            None => format!("{:>3}. {} {}", idx + 1, "[ ]     ", fixture),
        };
        report.push_str(&line);
        report.push('\n');
    }

    report
}
