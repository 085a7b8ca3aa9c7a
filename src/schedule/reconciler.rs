use super::types::{Fixture, FixtureStatus, ScheduleProgress, ScheduledFixture};
use crate::domain::{MatchResult, Mode};

/// Looks up the first logged result that plays out `fixture`.
///
/// Only results of the active mode are considered, and a fixture of the other
/// mode is always pending. Later duplicates of the same fixture are not reported.
pub fn reconcile<'a>(fixture: &Fixture, results: &'a [MatchResult], mode: Mode) -> FixtureStatus<'a> {
    if fixture.mode() != mode {
        return FixtureStatus::pending();
    }

    results
        .iter()
        .enumerate()
        .filter(|(_, result)| result.mode() == mode)
        .find(|(_, result)| fixture.is_played_by(result))
        .map(|(index, result)| FixtureStatus::completed(index, result))
        .unwrap_or_else(FixtureStatus::pending)
}

/// Reconciles a whole schedule at once
pub fn schedule_progress<'a>(
    fixtures: &'a [Fixture],
    results: &'a [MatchResult],
    mode: Mode,
) -> ScheduleProgress<'a> {
    let fixtures: Vec<ScheduledFixture<'a>> = fixtures
        .iter()
        .map(|fixture| ScheduledFixture {
            fixture,
            status: reconcile(fixture, results, mode),
        })
        .collect();
    let completed = fixtures.iter().filter(|f| f.status.completed).count();

    ScheduleProgress {
        total: fixtures.len(),
        completed,
        fixtures,
    }
}
