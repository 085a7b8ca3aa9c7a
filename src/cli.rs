use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::num::NonZeroUsize;

use crate::domain::Mode;

#[derive(Parser, Debug)]
#[command(author, version, about = "league-table: standings and fixtures for 1v1 and 2v2 leagues")]
pub struct Cli {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Show the league table
    Standings,
    /// Show one player's stats and match history
    Player {
        name: String,
    },
    /// List every recorded result
    Results,
    /// Generate the schedule and show which fixtures have been played
    Fixtures {
        /// Rounds to repeat when exactly four players play 2v2
        #[arg(short, long, default_value_t = 1)]
        rounds: usize,
    },
    /// Record a 1v1 result
    RecordSingle {
        home: String,
        away: String,
        home_goals: u32,
        away_goals: u32,
        #[arg(long)]
        note: Option<String>,
        /// Replace the result at this position instead of appending
        #[arg(long)]
        edit: Option<NonZeroUsize>,
    },
    /// Record a 2v2 result; everyone else on the roster sits out
    RecordDouble {
        #[arg(long, num_args = 2, required = true, value_names = ["PLAYER", "PLAYER"])]
        team_a: Vec<String>,
        #[arg(long, num_args = 2, required = true, value_names = ["PLAYER", "PLAYER"])]
        team_b: Vec<String>,
        team_a_goals: u32,
        team_b_goals: u32,
        #[arg(long)]
        note: Option<String>,
        /// Replace the result at this position instead of appending
        #[arg(long)]
        edit: Option<NonZeroUsize>,
    },
    /// Delete the result at a position
    Delete {
        position: NonZeroUsize,
    },
    /// Delete every result
    Clear,
    /// Add a player to the roster
    AddPlayer {
        name: String,
    },
    /// Remove a player; their results stop counting
    RemovePlayer {
        name: String,
    },
    /// Rename a player; this clears all results
    RenamePlayer {
        old: String,
        new: String,
    },
    /// Show or switch the league mode (1v1 or 2v2)
    Mode {
        mode: Option<Mode>,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_record_double() {
        let cli = Cli::try_parse_from([
            "league_table",
            "record-double",
            "--team-a",
            "Eli",
            "Amit",
            "--team-b",
            "Idan",
            "Alon",
            "3",
            "2",
            "--edit",
            "4",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::RecordDouble {
                team_a: vec!["Eli".into(), "Amit".into()],
                team_b: vec!["Idan".into(), "Alon".into()],
                team_a_goals: 3,
                team_b_goals: 2,
                note: None,
                edit: NonZeroUsize::new(4),
            }
        );
    }

    #[test]
    fn test_parse_mode_and_rejects_zero_position() {
        let cli = Cli::try_parse_from(["league_table", "mode", "2v2", "--json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.command, Command::Mode { mode: Some(Mode::TwoVsTwo) });

        assert!(Cli::try_parse_from(["league_table", "delete", "0"]).is_err());
    }
}
