// src/config.rs

use std::{env, str::FromStr, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_OPTIMIZER_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_OPTIMIZER_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub port: u16,
    pub optimizer_url: String,
    pub optimizer_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            optimizer_url: DEFAULT_OPTIMIZER_URL.to_string(),
            optimizer_timeout: Duration::from_secs(DEFAULT_OPTIMIZER_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Reads the process environment (call `dotenvy::dotenv()` first for `.env`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let optimizer_url = lookup("OPTIMIZER_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_OPTIMIZER_URL.to_string());

        Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            optimizer_url,
            optimizer_timeout: Duration::from_secs(parse_or(
                &lookup,
                "OPTIMIZER_TIMEOUT_SECS",
                DEFAULT_OPTIMIZER_TIMEOUT_SECS,
            )),
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "ignoring malformed setting");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(settings(&[]), Settings::default());
    }

    #[test]
    fn reads_and_normalises_values() {
        let s = settings(&[
            ("PORT", "9090"),
            ("OPTIMIZER_URL", "http://solver:8000/"),
            ("OPTIMIZER_TIMEOUT_SECS", "30"),
        ]);
        assert_eq!(s.port, 9090);
        assert_eq!(s.optimizer_url, "http://solver:8000");
        assert_eq!(s.optimizer_timeout, Duration::from_secs(30));
    }

    #[test]
    fn malformed_values_fall_back() {
        let s = settings(&[("PORT", "eighty"), ("OPTIMIZER_URL", "  ")]);
        assert_eq!(s.port, DEFAULT_PORT);
        assert_eq!(s.optimizer_url, DEFAULT_OPTIMIZER_URL);
    }
}
