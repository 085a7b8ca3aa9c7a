pub mod entries;
pub mod models;
pub mod setup;
mod store;

pub use models::*;
pub use store::SqliteStore;
