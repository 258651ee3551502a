use std::env;
use std::path::PathBuf;

use crate::error::{AdvisorError, AdvisorResult};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_DB_PATH: &str = "data/advisor.db";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_MAX_CREDITS: u32 = 15;
pub const DEFAULT_SPECIALIZED_CATEGORY_ID: i64 = 2;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub bind_addr: String,
    pub db_path: PathBuf,
    pub log_level: String,
    pub allowed_origin: String,
    pub default_max_credits: u32,
    pub specialized_category_id: i64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            default_max_credits: DEFAULT_MAX_CREDITS,
            specialized_category_id: DEFAULT_SPECIALIZED_CATEGORY_ID,
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> AdvisorResult<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> AdvisorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_path = match get("ADVISOR_DB_URL") {
            Some(url) => db_path_from_url(&url)?,
            None => get("ADVISOR_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
        };

        Ok(Self {
            bind_addr: get("ADVISOR_BIND_ADDR").unwrap_or(defaults.bind_addr),
            db_path,
            log_level: get("ADVISOR_LOG").unwrap_or(defaults.log_level),
            allowed_origin: get("ADVISOR_ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin),
            default_max_credits: parse_or(
                get("ADVISOR_DEFAULT_MAX_CREDITS"),
                "ADVISOR_DEFAULT_MAX_CREDITS",
                defaults.default_max_credits,
            )?,
            specialized_category_id: parse_or(
                get("ADVISOR_SPECIALIZED_CATEGORY_ID"),
                "ADVISOR_SPECIALIZED_CATEGORY_ID",
                defaults.specialized_category_id,
            )?,
        })
    }
}

/// Accepts `sqlite://path` and `file://path`; anything else is rejected.
fn db_path_from_url(url: &str) -> AdvisorResult<PathBuf> {
    if let Some(path) = url.strip_prefix("sqlite://") {
        Ok(PathBuf::from(path))
    } else if let Some(path) = url.strip_prefix("file://") {
        Ok(PathBuf::from(path))
    } else {
        Err(AdvisorError::Config(format!(
            "ADVISOR_DB_URL uses unsupported scheme: {url}"
        )))
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, key: &str, default: T) -> AdvisorResult<T> {
    match raw {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse::<T>()
            .map_err(|_| AdvisorError::Config(format!("{key} must be a number, got '{v}'"))),
    }
}
