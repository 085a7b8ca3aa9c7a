pub mod fixtures;
pub mod results;
pub mod table;

use anyhow::{Context, Result};
use serde::Serialize;

pub use fixtures::{format_fixture, format_schedule};
pub use results::{format_player_report, format_result, format_results};
pub use table::format_standings;

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
