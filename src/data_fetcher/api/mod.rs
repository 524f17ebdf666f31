//! Upstream client: HTTP plumbing, URL builders and the resource operations

pub mod core;
mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use core::{
    fetch_bonus_leaderboard, fetch_entry_history, fetch_fixtures, fetch_live_points,
    fetch_reference_catalog, fetch_squad, fetch_standings,
};
pub use http_client::create_http_client_with_timeout;
pub use urls::{
    build_backend_bootstrap_url, build_backend_fixtures_url, build_backend_squad_url,
    build_backend_standings_url, build_public_bootstrap_url, build_public_entry_url,
    build_public_fixtures_url, build_public_history_url, build_public_live_url,
    build_public_picks_url, build_public_standings_url,
};
