// Server configuration loaded from environment variables.
// Decision: Reset the event table on startup unless WHISKERS_RESET_DB opts out

use std::path::PathBuf;

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Drop and re-create the event table at startup
    pub reset_db: bool,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Origins allowed by the CORS layer. Empty disables CORS.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("data/app.db"),
            host: "0.0.0.0".to_string(),
            port: 5000,
            reset_db: true,
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                tracing::warn!("Invalid PORT value {:?} ({}), using {}", raw, e, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let reset_db = lookup("WHISKERS_RESET_DB")
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or(defaults.reset_db);

        // Example: CORS_ALLOWED_ORIGINS="http://localhost:3000,https://cats.example.com"
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            database_path: lookup("DATABASE_PATH")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            host: lookup("HOST")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.host),
            port,
            reset_db,
            static_dir: lookup("STATIC_DIR")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cors_allowed_origins,
        }
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
