pub mod player_stats;
pub mod table;
pub mod types;
mod zones;

pub use player_stats::player_report;
pub use table::calculate_standings;
pub use types::{HistoryEntry, PlayerReport, PlayerStats, StandingsRow, Zone};
pub use zones::mark_zones;
