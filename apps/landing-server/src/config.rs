//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use launchpad_core::services::RateLimitPolicy;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub site: SiteConfig,
    pub signup: SignupConfig,
    pub store: StoreConfig,
}

/// Branding shown on the landing page and in the SVG assets.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub theme: Theme,
    pub contact_email: Option<String>,
    pub twitter_url: Option<String>,
    pub github_url: Option<String>,
    /// Countdown target. No countdown when unset.
    pub launch_at: Option<DateTime<Utc>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Launchpad".to_string(),
            tagline: "Something new is on the way.".to_string(),
            theme: Theme::default(),
            contact_email: None,
            twitter_url: None,
            github_url: None,
            launch_at: None,
        }
    }
}

/// Hex colours used by the page and the SVGs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#6d28d9".to_string(),
            accent: "#f59e0b".to_string(),
            background: "#0f172a".to_string(),
            text: "#f8fafc".to_string(),
        }
    }
}

/// Signup endpoint settings.
#[derive(Debug, Clone)]
pub struct SignupConfig {
    pub rate_limit: RateLimitPolicy,
    /// Where fresh signups are forwarded. Nothing is forwarded when unset.
    pub webhook_url: Option<String>,
    /// Header set by the fronting proxy with the real client address.
    pub trusted_ip_header: String,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            rate_limit: RateLimitPolicy::default(),
            webhook_url: None,
            trusted_ip_header: "cf-connecting-ip".to_string(),
        }
    }
}

/// Backing store selection. In-memory unless a Redis URL is given.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub redis_url: Option<String>,
    pub connect_timeout: Duration,
    pub fallback_to_memory: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            connect_timeout: Duration::from_secs(5),
            fallback_to_memory: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str| var(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let parsed = |key: &str, default| parse_or(key, text(key), default);
        let colour = |key: &str, default: String| match text(key) {
            Some(value) if is_hex_colour(&value) => value,
            Some(value) => {
                tracing::warn!(key, value = %value, "Ignoring invalid theme colour");
                default
            }
            None => default,
        };

        let theme_defaults = Theme::default();
        let site_defaults = SiteConfig::default();
        let signup_defaults = SignupConfig::default();
        let policy_defaults = RateLimitPolicy::default();
        let store_defaults = StoreConfig::default();

        let site = SiteConfig {
            brand: text("BRAND_NAME").unwrap_or(site_defaults.brand),
            tagline: text("TAGLINE").unwrap_or(site_defaults.tagline),
            theme: Theme {
                primary: colour("THEME_PRIMARY", theme_defaults.primary),
                accent: colour("THEME_ACCENT", theme_defaults.accent),
                background: colour("THEME_BACKGROUND", theme_defaults.background),
                text: colour("THEME_TEXT", theme_defaults.text),
            },
            contact_email: text("CONTACT_EMAIL"),
            twitter_url: text("TWITTER_URL"),
            github_url: text("GITHUB_URL"),
            launch_at: text("LAUNCH_AT").and_then(|raw| match DateTime::parse_from_rfc3339(&raw) {
                Ok(at) => Some(at.with_timezone(&Utc)),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Ignoring unparseable LAUNCH_AT");
                    None
                }
            }),
        };

        let signup = SignupConfig {
            rate_limit: RateLimitPolicy {
                max_requests: match parse_or(
                    "RATE_LIMIT_MAX_REQUESTS",
                    text("RATE_LIMIT_MAX_REQUESTS"),
                    policy_defaults.max_requests,
                ) {
                    0 => {
                        tracing::warn!("RATE_LIMIT_MAX_REQUESTS of 0 would reject every signup, using default");
                        policy_defaults.max_requests
                    }
                    n => n,
                },
                window: Duration::from_secs(parsed(
                    "RATE_LIMIT_WINDOW_SECS",
                    policy_defaults.window.as_secs(),
                )),
                retention: Duration::from_secs(parsed(
                    "RATE_LIMIT_RETENTION_SECS",
                    policy_defaults.retention.as_secs(),
                )),
            },
            webhook_url: text("SIGNUP_WEBHOOK_URL"),
            trusted_ip_header: text("TRUSTED_IP_HEADER")
                .map(|h| h.to_ascii_lowercase())
                .unwrap_or(signup_defaults.trusted_ip_header),
        };

        let store = StoreConfig {
            redis_url: text("REDIS_URL"),
            connect_timeout: Duration::from_secs(parsed(
                "REDIS_CONNECT_TIMEOUT_SECS",
                store_defaults.connect_timeout.as_secs(),
            )),
            fallback_to_memory: text("REDIS_FALLBACK_TO_MEMORY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(store_defaults.fallback_to_memory),
        };

        Self {
            host: text("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or("PORT", text("PORT"), 8080),
            site,
            signup,
            store,
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
{
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %value, "Ignoring unparseable setting");
            default
        }),
        None => default,
    }
}

/// `#rgb`, `#rrggbb` or `#rrggbbaa`.
fn is_hex_colour(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}
