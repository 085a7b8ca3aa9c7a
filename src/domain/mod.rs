pub mod models;
mod state;
pub mod validation;

pub use models::*;
pub use state::LeagueState;
pub use validation::ValidationError;
