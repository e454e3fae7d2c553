use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. The eBird API key
/// and `DATABASE_URL` are deliberately not part of this struct: their
/// absence fails the dependent operation, not startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory the hotspot CSV snapshot is written to (default: `data`).
    pub snapshot_dir: PathBuf,
    /// How often the observation refresh job runs, in seconds (default: `3600`).
    pub refresh_interval_secs: u64,
    /// Lookback window for provider observation fetches, in days (default: `14`).
    pub ebird_back_days: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SNAPSHOT_DIR`          | `data`                  |
    /// | `REFRESH_INTERVAL_SECS` | `3600`                  |
    /// | `EBIRD_BACK_DAYS`       | `14`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let snapshot_dir =
            PathBuf::from(std::env::var("SNAPSHOT_DIR").unwrap_or_else(|_| "data".into()));

        let refresh_interval_secs: u64 = std::env::var("REFRESH_INTERVAL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("REFRESH_INTERVAL_SECS must be a valid u64");

        let ebird_back_days: u32 = std::env::var("EBIRD_BACK_DAYS")
            .unwrap_or_else(|_| "14".into())
            .parse()
            .expect("EBIRD_BACK_DAYS must be a valid u32");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            snapshot_dir,
            refresh_interval_secs,
            ebird_back_days,
        }
    }
}
