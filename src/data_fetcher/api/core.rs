//! The operations this crate exposes to its presentation layer: reference
//! catalog, league standings, squads, fixtures, bonus leaderboards and entry
//! history.
//!
//! Every operation is request-scoped: it fetches what it needs, joins
//! independent fetches concurrently, and discards everything when done.
//! When a backend is configured it is tried first, with transparent
//! fallback to the public API.

use futures::join;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::constants::retry;
use crate::data_fetcher::enricher::{build_bonus_tally, enrich_picks, resolve_current_gw};
use crate::data_fetcher::models::{
    EntryHistory, EntryProfile, Fixture, LivePoints, LiveResponse, ReferenceCatalog, SquadPayload,
    StandingRow,
};
use crate::data_fetcher::normalizer::{
    NormalizeOptions, normalize_fixtures, normalize_squad, normalize_standings,
};
use crate::data_fetcher::processors::{BonusRank, bonus_leaderboard};
use crate::error::AppError;

use super::fetch_utils::{fetch, fetch_value, fetch_value_with_retry, with_fallback};
use super::urls::{
    build_backend_bootstrap_url, build_backend_fixtures_url, build_backend_squad_url,
    build_backend_standings_url, build_public_bootstrap_url, build_public_entry_url,
    build_public_fixtures_url, build_public_history_url, build_public_live_url,
    build_public_picks_url, build_public_standings_url,
};

/// Fetches the reference catalog, preferring the configured backend.
///
/// Everything downstream joins against this snapshot, so its failure
/// propagates instead of degrading.
#[instrument(skip(client, config))]
pub async fn fetch_reference_catalog(
    client: &Client,
    config: &Config,
) -> Result<ReferenceCatalog, AppError> {
    let primary = config.backend_url.as_deref().map(|base| {
        let url = build_backend_bootstrap_url(base);
        async move { fetch::<ReferenceCatalog>(client, &url).await }
    });

    let fallback_url = build_public_bootstrap_url(&config.public_api_base);
    let fallback = async { fetch::<ReferenceCatalog>(client, &fallback_url).await };

    let catalog = with_fallback(primary, fallback).await?;
    debug!(
        "Reference catalog loaded: {} events, {} teams, {} players",
        catalog.events.len(),
        catalog.teams.len(),
        catalog.elements.len()
    );
    Ok(catalog)
}

/// Fetches classic-league standings for a league id.
///
/// This is the one resource with a retry policy: a fixed number of
/// sequential attempts per source with a fixed delay. A backend that fails,
/// returns an unrecognizable document, or returns zero rows falls through
/// to the public API; an unrecognizable public document is an error, while
/// a recognizable-but-empty table is returned as-is.
#[instrument(skip(client, config))]
pub async fn fetch_standings(
    client: &Client,
    config: &Config,
    league_id: u64,
) -> Result<Vec<StandingRow>, AppError> {
    let delay = Duration::from_millis(retry::STANDINGS_DELAY_MS);

    if let Some(base) = config.backend_url.as_deref() {
        let url = build_backend_standings_url(base, league_id);
        match fetch_value_with_retry(client, &url, retry::STANDINGS_MAX_ATTEMPTS, delay).await {
            Ok(raw) => match normalize_standings(&raw) {
                Some(rows) if !rows.is_empty() => {
                    info!("Standings for league {league_id} served by backend");
                    return Ok(rows);
                }
                Some(_) => {
                    warn!("Backend standings empty for league {league_id}, trying public API")
                }
                None => warn!(
                    "Backend standings unrecognizable for league {league_id}, trying public API"
                ),
            },
            Err(e) => warn!("Backend standings failed for league {league_id}: {e}"),
        }
    }

    let url = build_public_standings_url(&config.public_api_base, league_id);
    let raw = fetch_value_with_retry(client, &url, retry::STANDINGS_MAX_ATTEMPTS, delay).await?;
    normalize_standings(&raw).ok_or_else(|| {
        AppError::api_no_data("no standings container in upstream response", &url)
    })
}

/// Fetches fixtures, optionally restricted to one gameweek.
///
/// The event filter is re-applied client-side because the public API
/// returns the whole season when queried without a filter and some backend
/// revisions ignore the query parameter.
#[instrument(skip(client, config))]
pub async fn fetch_fixtures(
    client: &Client,
    config: &Config,
    gw: Option<u32>,
) -> Result<Vec<Fixture>, AppError> {
    let primary = config.backend_url.as_deref().map(|base| {
        let url = build_backend_fixtures_url(base, gw);
        async move { fetch_value(client, &url).await }
    });

    let fallback_url = build_public_fixtures_url(&config.public_api_base, gw);
    let fallback = async { fetch_value(client, &fallback_url).await };

    let raw = with_fallback(primary, fallback).await?;
    let normalized = normalize_fixtures(&raw, &NormalizeOptions::default()).ok_or_else(|| {
        AppError::api_no_data("no fixtures container in upstream response", &fallback_url)
    })?;

    if normalized.dropped > 0 {
        warn!("Dropped {} unparseable fixture elements", normalized.dropped);
    }

    let mut fixtures = normalized.fixtures;
    if let Some(gw) = gw {
        fixtures.retain(|fixture| fixture.event == Some(gw));
    }
    Ok(fixtures)
}

/// Fetches the live per-gameweek point totals from the public API
#[instrument(skip(client, config))]
pub async fn fetch_live_points(
    client: &Client,
    config: &Config,
    gw: u32,
) -> Result<LivePoints, AppError> {
    let url = build_public_live_url(&config.public_api_base, gw);
    let response: LiveResponse = fetch(client, &url).await?;
    Ok(LivePoints::new(gw, &response))
}

/// Fetches a manager's squad for the current gameweek.
///
/// With a backend configured, the catalog and the backend squad document are
/// fetched concurrently; a backend failure or an unusable document falls
/// back to composing the squad from public resources (entry profile plus the
/// picks resource for the resolved gameweek).
#[instrument(skip(client, config))]
pub async fn fetch_squad(
    client: &Client,
    config: &Config,
    entry_id: u64,
) -> Result<SquadPayload, AppError> {
    if let Some(base) = config.backend_url.as_deref() {
        let squad_url = build_backend_squad_url(base, entry_id);
        let (catalog, raw) = join!(
            fetch_reference_catalog(client, config),
            fetch_value(client, &squad_url)
        );
        let catalog = catalog?;

        match raw {
            Ok(raw) => {
                let gw = resolve_current_gw(&catalog.events);
                match assemble_squad(client, config, entry_id, &catalog, &raw, &squad_url, gw, None)
                    .await
                {
                    Ok(payload) => return Ok(payload),
                    Err(e) => {
                        warn!("Backend squad unusable for entry {entry_id}: {e}, trying public API")
                    }
                }
            }
            Err(e) => warn!("Backend squad failed for entry {entry_id}: {e}, trying public API"),
        }

        return fetch_public_squad(client, config, entry_id, Some(catalog)).await;
    }

    fetch_public_squad(client, config, entry_id, None).await
}

/// Public-API squad path: the catalog and the entry profile are independent
/// and fetched concurrently; the profile also supplies display names and the
/// entry's own current gameweek.
async fn fetch_public_squad(
    client: &Client,
    config: &Config,
    entry_id: u64,
    catalog: Option<ReferenceCatalog>,
) -> Result<SquadPayload, AppError> {
    let entry_url = build_public_entry_url(&config.public_api_base, entry_id);

    let (catalog, profile) = match catalog {
        Some(catalog) => {
            let profile = fetch::<EntryProfile>(client, &entry_url).await;
            (catalog, profile)
        }
        None => {
            let (catalog, profile) = join!(
                fetch_reference_catalog(client, config),
                fetch::<EntryProfile>(client, &entry_url)
            );
            (catalog?, profile)
        }
    };

    // The profile only carries display names and the current event; losing
    // it degrades labels, not the squad itself
    let profile = match profile {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!("Entry profile unavailable for {entry_id}: {e}");
            None
        }
    };

    let gw = profile
        .as_ref()
        .and_then(|p| p.current_event)
        .unwrap_or_else(|| resolve_current_gw(&catalog.events));

    let picks_url = build_public_picks_url(&config.public_api_base, entry_id, gw);
    let raw = fetch_value(client, &picks_url).await?;

    assemble_squad(
        client,
        config,
        entry_id,
        &catalog,
        &raw,
        &picks_url,
        gw,
        profile.as_ref(),
    )
    .await
}

/// Normalizes and enriches a raw squad document into the final payload.
///
/// An unrecognizable document and a document where no pick survives are both
/// "no usable data", reported with distinct diagnostics. Missing per-pick
/// points trigger a live-points fetch for the gameweek; a failed live fetch
/// degrades to pointless picks rather than failing the squad.
#[allow(clippy::too_many_arguments)]
async fn assemble_squad(
    client: &Client,
    config: &Config,
    entry_id: u64,
    catalog: &ReferenceCatalog,
    raw: &Value,
    source_url: &str,
    default_gw: u32,
    profile: Option<&EntryProfile>,
) -> Result<SquadPayload, AppError> {
    let normalized = normalize_squad(raw, &NormalizeOptions::default())
        .ok_or_else(|| AppError::api_no_data("no picks array in upstream response", source_url))?;

    if normalized.drafts.is_empty() {
        return Err(AppError::api_no_data(
            "could not normalize any picks from upstream response",
            source_url,
        ));
    }

    let gw = normalized.meta.gw.unwrap_or(default_gw);

    let live = if normalized.drafts.iter().any(|d| d.gw_points.is_none()) {
        match fetch_live_points(client, config, gw).await {
            Ok(live) => Some(live),
            Err(e) => {
                warn!("Live points unavailable for GW {gw}: {e}");
                None
            }
        }
    } else {
        None
    };

    let index = catalog.index();
    let enriched = enrich_picks(&normalized.drafts, &index, live.as_ref());

    if enriched.picks.is_empty() {
        return Err(AppError::api_no_data(
            "no picks with a resolvable position in upstream response",
            source_url,
        ));
    }
    if normalized.dropped + enriched.dropped > 0 {
        debug!(
            "Squad for entry {entry_id}: dropped {} elements during normalization, {} during enrichment",
            normalized.dropped, enriched.dropped
        );
    }

    Ok(SquadPayload {
        entry_id: normalized.meta.entry_id.unwrap_or(entry_id),
        team_name: normalized
            .meta
            .team_name
            .or_else(|| profile.and_then(|p| p.name.clone()))
            .unwrap_or_else(|| "Team".to_string()),
        manager_name: normalized
            .meta
            .manager_name
            .or_else(|| profile.and_then(|p| p.manager_name()))
            .unwrap_or_else(|| "Manager".to_string()),
        gw,
        picks: enriched.picks,
    })
}

/// Builds the bonus-point leaderboard for a gameweek, resolving the current
/// gameweek from the catalog when none is given
#[instrument(skip(client, config))]
pub async fn fetch_bonus_leaderboard(
    client: &Client,
    config: &Config,
    gw: Option<u32>,
) -> Result<(u32, Vec<BonusRank>), AppError> {
    let (catalog, gw, fixtures) = match gw {
        // Known gameweek: the catalog and fixtures are independent
        Some(gw) => {
            let (catalog, fixtures) = join!(
                fetch_reference_catalog(client, config),
                fetch_fixtures(client, config, Some(gw))
            );
            (catalog?, gw, fixtures?)
        }
        // Unknown gameweek: the fixtures filter needs the catalog first
        None => {
            let catalog = fetch_reference_catalog(client, config).await?;
            let gw = resolve_current_gw(&catalog.events);
            let fixtures = fetch_fixtures(client, config, Some(gw)).await?;
            (catalog, gw, fixtures)
        }
    };

    let tally = build_bonus_tally(&fixtures);
    let index = catalog.index();
    Ok((gw, bonus_leaderboard(&tally, &index)))
}

/// Fetches an entry's participation history from the public API and derives
/// the tenure summary
#[instrument(skip(client, config))]
pub async fn fetch_entry_history(
    client: &Client,
    config: &Config,
    entry_id: u64,
) -> Result<EntryHistory, AppError> {
    let url = build_public_history_url(&config.public_api_base, entry_id);
    let raw = fetch_value(client, &url).await?;

    let seasons = raw
        .get("past")
        .and_then(Value::as_array)
        .map(|past| {
            past.iter()
                .filter_map(|entry| entry.get("season_name"))
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(EntryHistory::from_seasons(entry_id, seasons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::Position;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::http_client::create_test_http_client;

    fn create_mock_config(public_uri: &str) -> Config {
        Config {
            backend_url: None,
            public_api_base: public_uri.to_string(),
            league_id: None,
            log_file_path: None,
            http_timeout_seconds: crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }

    fn mock_bootstrap_body() -> serde_json::Value {
        json!({
            "events": [
                {"id": 4, "is_current": false, "finished": true},
                {"id": 5, "is_current": true, "finished": false}
            ],
            "teams": [
                {"id": 3, "name": "Arsenal", "short_name": "ARS", "code": 3}
            ],
            "elements": [
                {"id": 7, "web_name": "Tester", "team": 3, "element_type": 3}
            ]
        })
    }

    async fn mount_bootstrap(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_bootstrap_body()))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_reference_catalog_public() {
        let mock_server = MockServer::start().await;
        mount_bootstrap(&mock_server).await;

        let config = create_mock_config(&mock_server.uri());
        let client = create_test_http_client();

        let catalog = fetch_reference_catalog(&client, &config).await.unwrap();
        assert_eq!(catalog.events.len(), 2);
        assert_eq!(catalog.elements[0].web_name, "Tester");
    }

    #[tokio::test]
    async fn test_fetch_reference_catalog_backend_preferred() {
        let backend = MockServer::start().await;
        let public = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bootstrap-static"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_bootstrap_body()))
            .expect(1)
            .mount(&backend)
            .await;

        let mut config = create_mock_config(&public.uri());
        config.backend_url = Some(backend.uri());
        let client = create_test_http_client();

        let catalog = fetch_reference_catalog(&client, &config).await.unwrap();
        assert_eq!(catalog.teams.len(), 1);
        // No requests reached the public mock; backend.expect(1) verifies on drop
    }

    #[tokio::test]
    async fn test_fetch_reference_catalog_backend_failure_falls_back() {
        let backend = MockServer::start().await;
        let public = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bootstrap-static"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&backend)
            .await;
        mount_bootstrap(&public).await;

        let mut config = create_mock_config(&public.uri());
        config.backend_url = Some(backend.uri());
        let client = create_test_http_client();

        let catalog = fetch_reference_catalog(&client, &config).await.unwrap();
        assert_eq!(catalog.elements.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_standings_public_classic_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leagues-classic/1391467/standings/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "standings": {"results": [
                    {"entry": 1, "entry_name": "Lobster XI", "player_name": "Niko",
                     "total": 312, "event_total": 61, "rank": 1, "last_rank": 2}
                ]}
            })))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server.uri());
        let client = create_test_http_client();

        let rows = fetch_standings(&client, &config, 1391467).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].entry_name, "Lobster XI");
        assert_eq!(rows[0].rank, Some(1));
        assert_eq!(rows[0].last_rank, Some(2));
    }

    #[tokio::test]
    async fn test_fetch_standings_backend_empty_falls_back() {
        let backend = MockServer::start().await;
        let public = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/league/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"standings": []})))
            .mount(&backend)
            .await;
        Mock::given(method("GET"))
            .and(path("/leagues-classic/7/standings/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "standings": {"results": [
                    {"entry": 2, "entry_name": "B", "player_name": "PB", "total": 90}
                ]}
            })))
            .mount(&public)
            .await;

        let mut config = create_mock_config(&public.uri());
        config.backend_url = Some(backend.uri());
        let client = create_test_http_client();

        let rows = fetch_standings(&client, &config, 7).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].entry, 2);
    }

    #[tokio::test]
    async fn test_fetch_standings_unrecognizable_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leagues-classic/9/standings/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "oops"})))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server.uri());
        let client = create_test_http_client();

        let result = fetch_standings(&client, &config, 9).await;
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }

    #[tokio::test]
    async fn test_fetch_fixtures_filters_by_event() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/fixtures/"))
            .and(query_param("event", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "event": 5, "team_h": 1, "team_a": 2},
                {"id": 2, "event": 6, "team_h": 3, "team_a": 4}
            ])))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server.uri());
        let client = create_test_http_client();

        // The stray event-6 fixture is filtered out client-side
        let fixtures = fetch_fixtures(&client, &config, Some(5)).await.unwrap();
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].id, 1);
    }

    #[tokio::test]
    async fn test_fetch_squad_public_end_to_end() {
        let mock_server = MockServer::start().await;
        mount_bootstrap(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/entry/4242/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 4242,
                "name": "Lobster XI",
                "player_first_name": "Niko",
                "player_last_name": "Salonen",
                "current_event": 5
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/entry/4242/event/5/picks/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"element": 7, "is_captain": true}]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/event/5/live/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "elements": [{"id": 7, "stats": {"total_points": 9}}]
            })))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server.uri());
        let client = create_test_http_client();

        let squad = fetch_squad(&client, &config, 4242).await.unwrap();

        assert_eq!(squad.entry_id, 4242);
        assert_eq!(squad.team_name, "Lobster XI");
        assert_eq!(squad.manager_name, "Niko Salonen");
        assert_eq!(squad.gw, 5);
        assert_eq!(squad.picks.len(), 1);

        let pick = &squad.picks[0];
        assert_eq!(pick.id, 7);
        assert_eq!(pick.web_name, "Tester");
        assert_eq!(pick.position, Position::Midfielder);
        assert_eq!(pick.team, Some(3));
        assert!(pick.is_captain);
        // 9 live points doubled by the captaincy multiplier
        assert_eq!(pick.gw_points, Some(18));
    }

    #[tokio::test]
    async fn test_fetch_squad_no_usable_picks() {
        let mock_server = MockServer::start().await;
        mount_bootstrap(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/entry/4242/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 4242, "current_event": 5
            })))
            .mount(&mock_server)
            .await;

        // A picks document with no recognizable container
        Mock::given(method("GET"))
            .and(path("/entry/4242/event/5/picks/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "nope"})))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server.uri());
        let client = create_test_http_client();

        let result = fetch_squad(&client, &config, 4242).await;
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }

    #[tokio::test]
    async fn test_fetch_squad_backend_preferred_with_inline_points() {
        let backend = MockServer::start().await;
        let public = MockServer::start().await;
        mount_bootstrap(&public).await;

        // Backend squads already carry gw_points: no live fetch happens
        Mock::given(method("GET"))
            .and(path("/team/4242"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entry_id": 4242,
                "team_name": "Lobster XI",
                "manager_name": "Niko",
                "gw": 5,
                "picks": [
                    {"id": 7, "web_name": "Tester", "position": 3, "team": 3,
                     "gw_points": 12, "is_captain": false}
                ]
            })))
            .mount(&backend)
            .await;

        let mut config = create_mock_config(&public.uri());
        config.backend_url = Some(backend.uri());
        let client = create_test_http_client();

        let squad = fetch_squad(&client, &config, 4242).await.unwrap();
        assert_eq!(squad.gw, 5);
        assert_eq!(squad.team_name, "Lobster XI");
        assert_eq!(squad.picks[0].gw_points, Some(12));
    }

    #[tokio::test]
    async fn test_fetch_bonus_leaderboard_resolves_current_gw() {
        let mock_server = MockServer::start().await;
        mount_bootstrap(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/fixtures/"))
            .and(query_param("event", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "event": 5, "team_h": 1, "team_a": 2, "started": true, "finished": true,
                 "stats": [{"identifier": "bonus",
                            "h": [{"element": 7, "value": 3}],
                            "a": [{"element": 8, "value": 1}]}]},
                {"id": 2, "event": 5, "team_h": 3, "team_a": 4, "started": true, "finished": true,
                 "stats": [{"identifier": "bonus",
                            "h": [{"element": 7, "value": 2}], "a": []}]}
            ])))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server.uri());
        let client = create_test_http_client();

        let (gw, rows) = fetch_bonus_leaderboard(&client, &config, None).await.unwrap();

        assert_eq!(gw, 5);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player_id, 7);
        assert_eq!(rows[0].web_name, "Tester");
        assert_eq!(rows[0].total_bonus, 5);
        assert_eq!(rows[1].web_name, "Player 8");
        assert_eq!(rows[1].total_bonus, 1);
    }

    #[tokio::test]
    async fn test_fetch_entry_history() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entry/4242/history/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "past": [
                    {"season_name": "2021/22", "total_points": 2001},
                    {"season_name": "2019/20", "total_points": 1800},
                    {"rank": 12345}
                ]
            })))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server.uri());
        let client = create_test_http_client();

        let history = fetch_entry_history(&client, &config, 4242).await.unwrap();
        assert_eq!(history.seasons_played, 2);
        assert_eq!(history.first_season.as_deref(), Some("2019/20"));
        assert_eq!(history.playing_since_year, Some(2019));
    }
}
