use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use chrono::FixedOffset;
use worddee_algo::{default_zone, parse_utc_offset};

use crate::db::config::{env_bool, DbConfig, DbConfigError};

const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:3001",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    /// Daily log files go here when file logging is on
    pub log_dir: Option<PathBuf>,
    /// Canonical zone every practice timestamp is expressed in
    pub practice_zone: FixedOffset,
    pub cors_origins: Vec<String>,
    pub seed_words: bool,
    pub database: DbConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, DbConfigError> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8000);

        let host = std::env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = env_bool("ENABLE_FILE_LOGS", false).then(|| {
            PathBuf::from(std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()))
        });

        let practice_zone = std::env::var("PRACTICE_TZ_OFFSET")
            .ok()
            .as_deref()
            .and_then(parse_utc_offset)
            .unwrap_or_else(default_zone);

        let cors_origins = std::env::var("CORS_ORIGINS")
            .ok()
            .map(|value| parse_origins(&value))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_cors_origins);

        Ok(Self {
            host,
            port,
            log_level,
            log_dir,
            practice_zone,
            cors_origins,
            seed_words: env_bool("SEED_WORDS", true),
            database: DbConfig::from_env()?,
        })
    }

    /// Defaults around an explicit database, for embedding and tests.
    pub fn with_database(database: DbConfig) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            log_level: "info".to_string(),
            log_dir: None,
            practice_zone: default_zone(),
            cors_origins: default_cors_origins(),
            seed_words: true,
            database,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn default_cors_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
