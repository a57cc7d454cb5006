/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// loaded first when present):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | BIND_ADDR | 0.0.0.0 | HTTP listen address |
/// | DATABASE_URL | sqlite:roster.db | SQLite URL, `sqlite::memory:` allowed |
/// | DB_MAX_CONNECTIONS | 5 | Pool size for file databases |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Default log filter when `RUST_LOG` is unset |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | SEED_ON_START | false | Load the sample roster at startup |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite::memory: SEED_ON_START=true cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// HTTP API bind address
    pub bind_addr: String,
    /// SQLite connection URL
    pub database_url: String,
    pub db_max_connections: u32,
    /// Runtime environment: development | staging | production
    pub environment: String,
    pub log_level: String,
    /// Rolling file logs are written here when set
    pub log_dir: Option<String>,
    /// Run the seed routine right after schema sync
    pub seed_on_start: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".into()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:roster.db".into()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            seed_on_start: std::env::var("SEED_ON_START")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Override the parts tests care about
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// `host:port` string for the HTTP listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("sqlite::memory:", 0);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.http_port, 0);
        assert!(config.listen_addr().ends_with(":0"));
    }
}
