//! URL building utilities for API endpoints.
//!
//! Two families: the configured internal backend (pre-aggregated resources,
//! no trailing slashes) and the public API (trailing slashes required - the
//! upstream router 301s without them, and the redirect drops headers).

/// Builds the public reference catalog (bootstrap) URL.
///
/// # Example
/// ```
/// use fpl_companion::data_fetcher::api::build_public_bootstrap_url;
///
/// let url = build_public_bootstrap_url("https://fantasy.premierleague.com/api");
/// assert_eq!(url, "https://fantasy.premierleague.com/api/bootstrap-static/");
/// ```
pub fn build_public_bootstrap_url(api_base: &str) -> String {
    format!("{api_base}/bootstrap-static/")
}

/// Builds the public classic-league standings URL for a league id.
///
/// # Example
/// ```
/// use fpl_companion::data_fetcher::api::build_public_standings_url;
///
/// let url = build_public_standings_url("https://fantasy.premierleague.com/api", 1391467);
/// assert_eq!(
///     url,
///     "https://fantasy.premierleague.com/api/leagues-classic/1391467/standings/"
/// );
/// ```
pub fn build_public_standings_url(api_base: &str, league_id: u64) -> String {
    format!("{api_base}/leagues-classic/{league_id}/standings/")
}

/// Builds the public fixtures URL, optionally filtered to one gameweek.
///
/// # Example
/// ```
/// use fpl_companion::data_fetcher::api::build_public_fixtures_url;
///
/// let all = build_public_fixtures_url("https://fantasy.premierleague.com/api", None);
/// assert_eq!(all, "https://fantasy.premierleague.com/api/fixtures/");
///
/// let one = build_public_fixtures_url("https://fantasy.premierleague.com/api", Some(7));
/// assert_eq!(one, "https://fantasy.premierleague.com/api/fixtures/?event=7");
/// ```
pub fn build_public_fixtures_url(api_base: &str, gw: Option<u32>) -> String {
    match gw {
        Some(gw) => format!("{api_base}/fixtures/?event={gw}"),
        None => format!("{api_base}/fixtures/"),
    }
}

/// Builds the public entry (manager) profile URL.
pub fn build_public_entry_url(api_base: &str, entry_id: u64) -> String {
    format!("{api_base}/entry/{entry_id}/")
}

/// Builds the public entry picks URL for one gameweek.
///
/// # Example
/// ```
/// use fpl_companion::data_fetcher::api::build_public_picks_url;
///
/// let url = build_public_picks_url("https://fantasy.premierleague.com/api", 4242, 7);
/// assert_eq!(
///     url,
///     "https://fantasy.premierleague.com/api/entry/4242/event/7/picks/"
/// );
/// ```
pub fn build_public_picks_url(api_base: &str, entry_id: u64, gw: u32) -> String {
    format!("{api_base}/entry/{entry_id}/event/{gw}/picks/")
}

/// Builds the public entry history URL.
pub fn build_public_history_url(api_base: &str, entry_id: u64) -> String {
    format!("{api_base}/entry/{entry_id}/history/")
}

/// Builds the public live per-gameweek points URL.
///
/// # Example
/// ```
/// use fpl_companion::data_fetcher::api::build_public_live_url;
///
/// let url = build_public_live_url("https://fantasy.premierleague.com/api", 7);
/// assert_eq!(url, "https://fantasy.premierleague.com/api/event/7/live/");
/// ```
pub fn build_public_live_url(api_base: &str, gw: u32) -> String {
    format!("{api_base}/event/{gw}/live/")
}

/// Builds the backend reference catalog URL.
pub fn build_backend_bootstrap_url(backend_url: &str) -> String {
    format!("{backend_url}/bootstrap-static")
}

/// Builds the backend league standings URL.
///
/// # Example
/// ```
/// use fpl_companion::data_fetcher::api::build_backend_standings_url;
///
/// let url = build_backend_standings_url("http://localhost:8000", 1391467);
/// assert_eq!(url, "http://localhost:8000/league/1391467");
/// ```
pub fn build_backend_standings_url(backend_url: &str, league_id: u64) -> String {
    format!("{backend_url}/league/{league_id}")
}

/// Builds the backend squad URL for an entry.
pub fn build_backend_squad_url(backend_url: &str, entry_id: u64) -> String {
    format!("{backend_url}/team/{entry_id}")
}

/// Builds the backend fixtures URL, optionally filtered to one gameweek.
pub fn build_backend_fixtures_url(backend_url: &str, gw: Option<u32>) -> String {
    match gw {
        Some(gw) => format!("{backend_url}/fixtures?event={gw}"),
        None => format!("{backend_url}/fixtures"),
    }
}
