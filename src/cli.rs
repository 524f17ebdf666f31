use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only touches configuration and should skip
/// fetching entirely
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_backend_url.is_some()
        || args.clear_backend_url
        || args.new_league_id.is_some()
        || args.new_log_file_path.is_some()
}

/// Classic FPL mini-league companion
///
/// Shows league standings, squads, fixtures and bonus-point breakdowns for a
/// classic Fantasy Premier League mini-league, fetched fresh on every run.
///
/// With no view flags the league table for the configured league is shown.
/// When a backend URL is configured, pre-aggregated data is fetched from it
/// first with transparent fallback to the public API.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// League id to show standings for. Defaults to the configured league.
    #[arg(short, long, help_heading = "Views")]
    pub league: Option<u64>,

    /// Show a manager's squad for the current gameweek, by entry id.
    #[arg(short, long, help_heading = "Views")]
    pub entry: Option<u64>,

    /// Show fixtures for a gameweek (current unless --gw is given).
    #[arg(short, long, help_heading = "Views")]
    pub fixtures: bool,

    /// Show the bonus-point leaderboard for a gameweek.
    #[arg(short, long, help_heading = "Views")]
    pub bonus: bool,

    /// Gameweek override for the fixtures and bonus views.
    #[arg(short, long, help_heading = "Views")]
    pub gw: Option<u32>,

    /// Also show how long the manager has been playing (with --entry).
    #[arg(long, help_heading = "Views")]
    pub history: bool,

    /// Set a backend base URL in the config file and exit.
    #[arg(long = "set-backend-url", value_name = "URL", help_heading = "Configuration")]
    pub new_backend_url: Option<String>,

    /// Remove the configured backend URL and exit.
    #[arg(long, help_heading = "Configuration")]
    pub clear_backend_url: bool,

    /// Set the default league id in the config file and exit.
    #[arg(long = "set-league", value_name = "ID", help_heading = "Configuration")]
    pub new_league_id: Option<u64>,

    /// Set a custom log file path in the config file and exit.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Show current configuration and exit.
    #[arg(long = "config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Log to a custom file path for this run only.
    #[arg(long, value_name = "PATH", help_heading = "Debug Options")]
    pub log_file: Option<String>,

    /// Enable verbose debug logging to stdout as well as the log file.
    #[arg(short, long, help_heading = "Debug Options")]
    pub debug: bool,
}
