pub mod catalog;
pub mod fixtures;
pub mod league;
pub mod live;
pub mod squad;

pub use catalog::{CatalogIndex, Element, Event, Position, ReferenceCatalog, Team};
pub use fixtures::{BONUS_STAT_IDENTIFIER, Fixture, FixtureStat, StatEntry};
pub use league::StandingRow;
pub use live::{LivePoints, LiveResponse};
pub use squad::{EntryHistory, EntryProfile, Pick, SquadPayload};
