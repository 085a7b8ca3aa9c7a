use anyhow::Result;

use league_table::cli::{Cli, Command};
use league_table::{
    handle_add_player, handle_clear, handle_completions, handle_delete, handle_fixtures,
    handle_mode, handle_player, handle_record_double, handle_record_single, handle_remove_player,
    handle_rename_player, handle_results, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let json = cli.json;

    match &cli.command {
        Command::Standings => handle_standings(json),
        Command::Player { name } => handle_player(name, json),
        Command::Results => handle_results(json),
        Command::Fixtures { rounds } => handle_fixtures(*rounds, json),
        Command::RecordSingle {
            home,
            away,
            home_goals,
            away_goals,
            note,
            edit,
        } => handle_record_single(home, away, *home_goals, *away_goals, note.clone(), *edit),
        Command::RecordDouble {
            team_a,
            team_b,
            team_a_goals,
            team_b_goals,
            note,
            edit,
        } => handle_record_double(
            team_a,
            team_b,
            *team_a_goals,
            *team_b_goals,
            note.clone(),
            *edit,
        ),
        Command::Delete { position } => handle_delete(*position),
        Command::Clear => handle_clear(),
        Command::AddPlayer { name } => handle_add_player(name),
        Command::RemovePlayer { name } => handle_remove_player(name),
        Command::RenamePlayer { old, new } => handle_rename_player(old, new),
        Command::Mode { mode } => handle_mode(*mode),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
