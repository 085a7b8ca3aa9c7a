pub mod generator;
pub mod reconciler;
pub mod types;

pub use generator::generate_fixtures;
pub use reconciler::{reconcile, schedule_progress};
pub use types::{Fixture, FixtureStatus, ScheduleProgress, ScheduledFixture};
