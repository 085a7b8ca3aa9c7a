use league_table::cache::FileStore;
use league_table::config::AppConfig;
use league_table::database::SqliteStore;
use league_table::domain::{DoubleResult, MatchResult, Mode, SingleResult, ValidationError};
use league_table::services::LeagueService;
use league_table::storage::KeyValueStore;
use tempfile::TempDir;

fn sqlite(dir: &TempDir) -> Box<dyn KeyValueStore> {
    Box::new(SqliteStore::open(&dir.path().join("league.db")).unwrap())
}

fn files(dir: &TempDir) -> Box<dyn KeyValueStore> {
    Box::new(FileStore::new(dir.path().join("data")).unwrap())
}

fn single(home: &str, away: &str, home_goals: u32, away_goals: u32) -> MatchResult {
    SingleResult::new(home, away, home_goals, away_goals).into()
}

#[test]
fn test_fresh_league_uses_default_roster() {
    let dir = TempDir::new().unwrap();
    let league = LeagueService::with_store(AppConfig::default(), sqlite(&dir)).unwrap();

    assert_eq!(league.state().roster, vec!["Eli", "Amit", "Idan", "Alon", "Mor"]);
    assert_eq!(league.state().mode, Mode::OneVsOne);
    assert!(league.standings().iter().all(|row| row.stats.played == 0));
}

#[test]
fn test_record_edit_delete_and_reload() {
    let dir = TempDir::new().unwrap();

    {
        let mut league = LeagueService::with_store(AppConfig::default(), sqlite(&dir)).unwrap();
        assert_eq!(league.record_result(single("Eli", "Amit", 3, 1), None).unwrap(), 1);
        assert_eq!(league.record_result(single("Idan", "Mor", 0, 0), None).unwrap(), 2);
        assert_eq!(league.record_result(single("Alon", "Eli", 2, 1), None).unwrap(), 3);

        // Amit actually won the opener
        league.record_result(single("Eli", "Amit", 1, 3), Some(1)).unwrap();
        league.delete_result(2).unwrap();
    }

    let league = LeagueService::with_store(AppConfig::default(), sqlite(&dir)).unwrap();
    assert_eq!(
        league.state().results,
        vec![single("Eli", "Amit", 1, 3), single("Alon", "Eli", 2, 1)]
    );

    let table = league.standings();
    let names: Vec<&str> = table.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Amit", "Alon", "Idan", "Mor", "Eli"]);
    assert_eq!(table[4].stats.lost, 2);
}

#[test]
fn test_invalid_results_are_rejected_without_saving() {
    let dir = TempDir::new().unwrap();
    let mut league = LeagueService::with_store(AppConfig::default(), files(&dir)).unwrap();

    let same = league.record_result(single("Eli", "Eli", 1, 0), None).unwrap_err();
    assert_eq!(
        same.downcast_ref::<ValidationError>(),
        Some(&ValidationError::SamePlayer("Eli".into()))
    );
    assert!(league.record_result(single("Eli", "Ghost", 1, 0), None).is_err());
    assert!(league.delete_result(1).is_err());

    let reloaded = LeagueService::with_store(AppConfig::default(), files(&dir)).unwrap();
    assert!(reloaded.state().results.is_empty());
}

#[test]
fn test_rename_clears_results_and_remove_keeps_them() {
    let dir = TempDir::new().unwrap();
    let mut league = LeagueService::with_store(AppConfig::default(), files(&dir)).unwrap();

    league.record_result(single("Eli", "Amit", 2, 0), None).unwrap();
    league.record_result(single("Idan", "Mor", 1, 0), None).unwrap();

    league.remove_player("Mor").unwrap();
    assert_eq!(league.state().results.len(), 2);
    assert!(league.standings().iter().all(|row| row.name != "Mor"));

    assert_eq!(league.rename_player("Eli", " Eliya ").unwrap(), 2);
    assert!(league.state().results.is_empty());
    assert_eq!(league.state().roster, vec!["Eliya", "Amit", "Idan", "Alon"]);
}

#[test]
fn test_doubles_schedule_tracks_completion() {
    let dir = TempDir::new().unwrap();
    let mut league = LeagueService::with_store(AppConfig::default(), sqlite(&dir)).unwrap();
    league.remove_player("Mor").unwrap();
    assert!(league.set_mode(Mode::TwoVsTwo).unwrap());
    assert!(!league.set_mode(Mode::TwoVsTwo).unwrap());

    let roster = league.state().roster.clone();
    let result = DoubleResult::new(
        ["Idan".into(), "Alon".into()],
        ["Eli".into(), "Amit".into()],
        4,
        2,
        &roster,
    );
    league.record_result(result.into(), None).unwrap();

    let fixtures = league.fixtures(2);
    assert_eq!(fixtures.len(), 6);

    let progress = league.schedule_progress(&fixtures);
    assert_eq!(progress.total, 6);
    assert_eq!(progress.completed, 0);

    let swapped = DoubleResult::new(
        ["Eli".into(), "Amit".into()],
        ["Idan".into(), "Alon".into()],
        1,
        1,
        &roster,
    );
    league.record_result(swapped.into(), None).unwrap();

    let progress = league.schedule_progress(&fixtures);
    assert_eq!(progress.completed, 2);
    assert_eq!(progress.fixtures[0].status.log_index, Some(1));
    assert_eq!(progress.fixtures[3].status.log_index, Some(1));
    assert_eq!(progress.pending(), 4);
}
