pub mod cache;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod render;
pub mod schedule;
pub mod services;
pub mod standings;
pub mod storage;

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use serde::Serialize;
use std::num::NonZeroUsize;

use crate::cli::Cli;
use crate::config::settings::AppConfig;
use crate::domain::{DoubleResult, MatchResult, Mode, SingleResult, Team};
use crate::services::LeagueService;
use crate::standings::{StandingsRow, Zone};

pub fn interpret() -> Cli {
    Cli::parse()
}

fn open_league() -> Result<LeagueService> {
    LeagueService::open(AppConfig::new())
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", render::to_json(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

#[derive(Serialize)]
struct ZonedRow<'a> {
    #[serde(flatten)]
    row: &'a StandingsRow,
    zone: Zone,
}

fn to_team(players: &[String], label: &str) -> Result<Team> {
    match players {
        [first, second] => Ok([first.trim().to_string(), second.trim().to_string()]),
        _ => Err(anyhow!("{} needs exactly two players, got {}", label, players.len())),
    }
}

pub fn handle_standings(json: bool) -> Result<()> {
    let league = open_league()?;
    let rows = league.standings_with_zones();
    let mode = league.state().mode;

    let table: Vec<ZonedRow<'_>> = rows
        .iter()
        .map(|(row, zone)| ZonedRow { row, zone: *zone })
        .collect();
    emit(json, &table, || render::format_standings(&rows, mode))
}

pub fn handle_player(name: &str, json: bool) -> Result<()> {
    let league = open_league()?;
    let report = league.player_report(name.trim());
    emit(json, &report, || render::format_player_report(&report))
}

pub fn handle_results(json: bool) -> Result<()> {
    let league = open_league()?;
    let state = league.state();
    emit(json, &state.results, || {
        render::format_results(&state.results, state.mode)
    })
}

pub fn handle_fixtures(rounds: usize, json: bool) -> Result<()> {
    let league = open_league()?;
    let fixtures = league.fixtures(rounds);
    let progress = league.schedule_progress(&fixtures);
    emit(json, &progress, || render::format_schedule(&progress))
}

fn record(league: &mut LeagueService, result: MatchResult, edit: Option<NonZeroUsize>) -> Result<()> {
    let line = render::format_result(&result);
    let position = league.record_result(result, edit.map(NonZeroUsize::get))?;

    match edit {
        Some(_) => println!("Updated result #{}: {}", position, line),
        None => println!("Recorded result #{}: {}", position, line),
    }
    Ok(())
}

pub fn handle_record_single(
    home: &str,
    away: &str,
    home_goals: u32,
    away_goals: u32,
    note: Option<String>,
    edit: Option<NonZeroUsize>,
) -> Result<()> {
    let result = SingleResult::new(home.trim(), away.trim(), home_goals, away_goals).with_note(note);
    record(&mut open_league()?, result.into(), edit)
}

pub fn handle_record_double(
    team_a: &[String],
    team_b: &[String],
    team_a_goals: u32,
    team_b_goals: u32,
    note: Option<String>,
    edit: Option<NonZeroUsize>,
) -> Result<()> {
    let team_a = to_team(team_a, "Team A")?;
    let team_b = to_team(team_b, "Team B")?;

    let mut league = open_league()?;
    let result = DoubleResult::new(team_a, team_b, team_a_goals, team_b_goals, &league.state().roster)
        .with_note(note);
    record(&mut league, result.into(), edit)
}

pub fn handle_delete(position: NonZeroUsize) -> Result<()> {
    let mut league = open_league()?;
    let removed = league.delete_result(position.get())?;
    println!("Deleted result #{}: {}", position, render::format_result(&removed));
    Ok(())
}

pub fn handle_clear() -> Result<()> {
    let mut league = open_league()?;
    let cleared = league.clear_results()?;
    println!("Cleared {} results", cleared);
    Ok(())
}

pub fn handle_add_player(name: &str) -> Result<()> {
    let mut league = open_league()?;
    let added = league.add_player(name)?;
    println!("Added {}", added);
    Ok(())
}

pub fn handle_remove_player(name: &str) -> Result<()> {
    let mut league = open_league()?;
    league.remove_player(name.trim())?;
    println!("Removed {}", name.trim());
    Ok(())
}

pub fn handle_rename_player(old: &str, new: &str) -> Result<()> {
    let mut league = open_league()?;
    let cleared = league.rename_player(old.trim(), new)?;
    println!("Renamed {} to {} ({} results cleared)", old.trim(), new.trim(), cleared);
    Ok(())
}

pub fn handle_mode(mode: Option<Mode>) -> Result<()> {
    let mut league = open_league()?;

    match mode {
        None => println!("Current mode: {}", league.state().mode),
        Some(mode) => {
            if league.set_mode(mode)? {
                println!("Switched to {}", mode);
            } else {
                println!("Already playing {}", mode);
            }
        }
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
