use std::io::stdout;

use tracing::{error, info};

use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::api::{
    create_http_client_with_timeout, fetch_bonus_leaderboard, fetch_entry_history, fetch_fixtures,
    fetch_reference_catalog, fetch_squad, fetch_standings,
};
use crate::data_fetcher::enricher::resolve_current_gw;
use crate::data_fetcher::processors::sort_fixtures_for_display;
use crate::display::{bonus_page, error_page, fixtures_page, squad_page, standings_page};
use crate::error::AppError;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    let views = [args.entry.is_some(), args.fixtures, args.bonus];
    if views.iter().filter(|&&v| v).count() > 1 {
        return Err(AppError::config_error(
            "Choose one view: --entry, --fixtures or --bonus",
        ));
    }

    if args.gw.is_some() && !args.fixtures && !args.bonus {
        return Err(AppError::config_error(
            "--gw only applies to the fixtures (-f) and bonus (-b) views",
        ));
    }

    if args.history && args.entry.is_none() {
        return Err(AppError::config_error("--history requires --entry"));
    }

    Ok(())
}

/// Applies any configuration flags. Returns true when a config operation ran
/// and the process should exit without fetching.
pub async fn handle_config_operations(args: &Args) -> Result<bool, AppError> {
    if !crate::cli::is_config_operation(args) {
        return Ok(false);
    }

    if args.list_config {
        Config::display().await?;
        return Ok(true);
    }

    let mut config = Config::load().await.unwrap_or_default();

    if let Some(url) = &args.new_backend_url {
        config.backend_url = Some(url.trim_end_matches('/').to_string());
    }
    if args.clear_backend_url {
        config.backend_url = None;
    }
    if let Some(league_id) = args.new_league_id {
        config.league_id = Some(league_id);
    }
    if let Some(path) = &args.new_log_file_path {
        config.log_file_path = Some(path.clone());
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated: {}", Config::get_config_path());
    Ok(true)
}

/// Fetches and renders the requested view.
///
/// A failed fetch renders a friendly placeholder page with a diagnostic row
/// instead of propagating; every run is independent and a broken upstream
/// must not look like a broken program.
pub async fn run_view(args: &Args, config: &Config) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let mut out = stdout();

    if let Some(entry_id) = args.entry {
        match fetch_squad(&client, config, entry_id).await {
            Ok(payload) => {
                // The squad page resolves club labels through the catalog;
                // without one the page falls back to placeholder labels
                let catalog = match fetch_reference_catalog(&client, config).await {
                    Ok(catalog) => catalog,
                    Err(e) => {
                        info!("Catalog unavailable for club labels: {e}");
                        crate::data_fetcher::models::ReferenceCatalog::default()
                    }
                };
                let index = catalog.index();
                squad_page(&payload, &index).render_buffered(&mut out)?;

                if args.history {
                    match fetch_entry_history(&client, config, entry_id).await {
                        Ok(history) => {
                            if let Some(year) = history.playing_since_year {
                                println!(
                                    "\n Playing since {year} \u{2022} {} seasons",
                                    history.seasons_played
                                );
                            }
                        }
                        Err(e) => info!("Entry history unavailable for {entry_id}: {e}"),
                    }
                }
            }
            Err(e) => {
                error!("Squad view failed for entry {entry_id}: {e}");
                error_page("squad", &e).render_buffered(&mut out)?;
            }
        }
        return Ok(());
    }

    if args.fixtures {
        let catalog = match fetch_reference_catalog(&client, config).await {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("Fixtures view failed: {e}");
                error_page("fixtures", &e).render_buffered(&mut out)?;
                return Ok(());
            }
        };
        let gw = args.gw.unwrap_or_else(|| resolve_current_gw(&catalog.events));

        match fetch_fixtures(&client, config, Some(gw)).await {
            Ok(mut fixtures) => {
                sort_fixtures_for_display(&mut fixtures);
                let index = catalog.index();
                fixtures_page(gw, &fixtures, &index).render_buffered(&mut out)?;
            }
            Err(e) => {
                error!("Fixtures view failed for GW {gw}: {e}");
                error_page("fixtures", &e).render_buffered(&mut out)?;
            }
        }
        return Ok(());
    }

    if args.bonus {
        match fetch_bonus_leaderboard(&client, config, args.gw).await {
            Ok((gw, rows)) => bonus_page(gw, &rows).render_buffered(&mut out)?,
            Err(e) => {
                error!("Bonus view failed: {e}");
                error_page("bonus", &e).render_buffered(&mut out)?;
            }
        }
        return Ok(());
    }

    // Default view: league standings
    let Some(league_id) = args.league.or(config.league_id) else {
        return Err(AppError::config_error(
            "No league id given; pass --league or set one with --set-league",
        ));
    };

    match fetch_standings(&client, config, league_id).await {
        Ok(rows) => standings_page(league_id, &rows).render_buffered(&mut out)?,
        Err(e) => {
            error!("Standings view failed for league {league_id}: {e}");
            error_page("league table", &e).render_buffered(&mut out)?;
        }
    }

    Ok(())
}
