//! Engine configuration loaded from environment variables.
//!
//! Every value has a default so the server starts with an empty
//! environment; only the generative fallback requires a key to be set.

use chrono::{FixedOffset, Offset, Utc};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "mysql://root@localhost:3306/transtar";
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_HANDLER_TIMEOUT_SECS: u64 = 10;
/// The booking store runs on Singapore/Kuala Lumpur time (UTC+8).
pub const DEFAULT_STORE_UTC_OFFSET_MINUTES: i32 = 480;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_FALLBACK_MAX_TOKENS: u32 = 50;
pub const DEFAULT_FALLBACK_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_TOURS_URL: &str = "https://transtar.softrefine.com/tours";
pub const DEFAULT_ATTRACTIONS_URL: &str = "https://transtar.softrefine.com/attractions";

/// Full engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    /// Bound on a single handler run before the fallback reply is sent.
    pub handler_timeout: Duration,
    /// Local time of the booking store; "not in the past" filters use its calendar date.
    pub store_offset: FixedOffset,
    /// `None` disables the generative fallback.
    pub completion: Option<CompletionConfig>,
    pub fallback: FallbackSettings,
    pub links: PackageLinks,
    pub cors_allowed_origins: Option<String>,
}

/// Connection settings for an OpenAI-compatible completion API.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// Generation bounds for the unknown-intent fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackSettings {
    pub max_tokens: u32,
    pub temperature: f32,
    pub system_prompt: Option<String>,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_FALLBACK_MAX_TOKENS,
            temperature: DEFAULT_FALLBACK_TEMPERATURE,
            system_prompt: None,
        }
    }
}

/// Deep links attached to package cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLinks {
    pub tours_url: String,
    pub attractions_url: String,
}

impl Default for PackageLinks {
    fn default() -> Self {
        Self {
            tours_url: DEFAULT_TOURS_URL.to_string(),
            attractions_url: DEFAULT_ATTRACTIONS_URL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let completion = get("OPENAI_API_KEY")
            .or_else(|| get("OPENAI_API"))
            .map(|api_key| CompletionConfig {
                api_key,
                base_url: get("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            });

        Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                get("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            ),
            server_host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_or(
                "SERVER_PORT",
                get("SERVER_PORT").or_else(|| get("PORT")),
                DEFAULT_SERVER_PORT,
            ),
            handler_timeout: Duration::from_secs(parse_or(
                "HANDLER_TIMEOUT_SECS",
                get("HANDLER_TIMEOUT_SECS"),
                DEFAULT_HANDLER_TIMEOUT_SECS,
            )),
            store_offset: store_offset(get("STORE_UTC_OFFSET_MINUTES")),
            completion,
            fallback: FallbackSettings {
                max_tokens: parse_or(
                    "FALLBACK_MAX_TOKENS",
                    get("FALLBACK_MAX_TOKENS"),
                    DEFAULT_FALLBACK_MAX_TOKENS,
                ),
                temperature: parse_or(
                    "FALLBACK_TEMPERATURE",
                    get("FALLBACK_TEMPERATURE"),
                    DEFAULT_FALLBACK_TEMPERATURE,
                ),
                system_prompt: get("FALLBACK_SYSTEM_PROMPT"),
            },
            links: PackageLinks {
                tours_url: get("TOURS_URL").unwrap_or_else(|| DEFAULT_TOURS_URL.to_string()),
                attractions_url: get("ATTRACTIONS_URL")
                    .unwrap_or_else(|| DEFAULT_ATTRACTIONS_URL.to_string()),
            },
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
        }
    }
}

fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}

fn store_offset(raw: Option<String>) -> FixedOffset {
    let minutes = parse_or(
        "STORE_UTC_OFFSET_MINUTES",
        raw,
        DEFAULT_STORE_UTC_OFFSET_MINUTES,
    );

    offset_from_minutes(minutes)
        .or_else(|| {
            tracing::warn!(minutes, "Store UTC offset out of range, using default");
            offset_from_minutes(DEFAULT_STORE_UTC_OFFSET_MINUTES)
        })
        .unwrap_or_else(|| Utc.fix())
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match value {
        None => default,
        Some(raw) => match raw.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    default = %default,
                    "Invalid configuration value, using default"
                );
                default
            }
        },
    }
}
