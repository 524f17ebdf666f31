//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for outbound HTTP requests in seconds.
/// Every upstream call is bounded by this wall-clock budget.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 12;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Public Fantasy Premier League API base. Used when no backend is configured
/// or as the fallback source when the configured backend fails.
pub const PUBLIC_API_BASE: &str = "https://fantasy.premierleague.com/api";

/// Referer sent with public API requests. FPL rejects some requests without
/// browser-like headers.
pub const PUBLIC_API_REFERER: &str = "https://fantasy.premierleague.com/";

/// User agent sent with public API requests
pub const PUBLIC_API_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";

/// Accept header sent with public API requests
pub const PUBLIC_API_ACCEPT: &str = "application/json,text/plain,*/*";

/// Gameweek used when the reference catalog carries no events at all
pub const FALLBACK_GAMEWEEK: u32 = 1;

/// Retry configuration. Only the standings resource retries; everything else
/// is a single attempt per source.
pub mod retry {
    /// Maximum number of attempts for the standings resource
    pub const STANDINGS_MAX_ATTEMPTS: u32 = 3;

    /// Fixed delay between standings attempts (milliseconds)
    pub const STANDINGS_DELAY_MS: u64 = 1500;
}

/// Payload normalization limits
pub mod normalizer {
    /// Maximum depth for the breadth-first container search fallback
    pub const DEEP_SEARCH_MAX_DEPTH: usize = 4;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the internal backend base URL override
    pub const BACKEND_URL: &str = "FPL_COMPANION_BACKEND_URL";

    /// Environment variable for the default league id override
    pub const LEAGUE_ID: &str = "FPL_COMPANION_LEAGUE_ID";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "FPL_COMPANION_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds (default: 12)
    pub const HTTP_TIMEOUT: &str = "FPL_COMPANION_HTTP_TIMEOUT";
}
