//! Classic FPL Mini-League Companion Library
//!
//! This library provides functionality for fetching, normalizing and
//! enriching classic Fantasy Premier League mini-league data: standings,
//! squads, fixtures and bonus-point breakdowns.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fpl_companion::config::Config;
//! use fpl_companion::data_fetcher::api::{create_http_client_with_timeout, fetch_standings};
//! use fpl_companion::display::standings_page;
//! use fpl_companion::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     // Fetch and render the league table
//!     let rows = fetch_standings(&client, &config, 1391467).await?;
//!     let mut stdout = std::io::stdout();
//!     standings_page(1391467, &rows).render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod display;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{
    fetch_bonus_leaderboard, fetch_entry_history, fetch_fixtures, fetch_reference_catalog,
    fetch_squad, fetch_standings,
};
pub use data_fetcher::models::{
    Fixture, Pick, Position, ReferenceCatalog, SquadPayload, StandingRow,
};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
