//! Fetching, normalization and enrichment of upstream fantasy-league data.
//!
//! Everything in here is request-scoped: a request fetches what it needs,
//! joins it against the freshly fetched reference catalog, and discards it.

pub mod api;
pub mod enricher;
pub mod models;
pub mod normalizer;
pub mod processors;

pub use api::{
    fetch_bonus_leaderboard, fetch_entry_history, fetch_fixtures, fetch_live_points,
    fetch_reference_catalog, fetch_squad, fetch_standings,
};
pub use enricher::{BonusTally, build_bonus_tally, enrich_picks, resolve_current_gw};
pub use models::{
    CatalogIndex, EntryHistory, Fixture, LivePoints, Pick, Position, ReferenceCatalog,
    SquadPayload, StandingRow,
};
pub use processors::{BonusRank, bonus_leaderboard, group_picks_by_position, sort_fixtures_for_display};
