use anyhow::{Context, Result};

use crate::selection::SelectorStrategy;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON component catalog. `None` uses the built-in registry.
    pub component_registry_path: Option<String>,
    pub selector_strategy: SelectorStrategy,
    /// Default for requests that do not set `merge_sparse_sections`.
    pub merge_sparse_sections: bool,
    /// When set, every generated build is also written to `<dir>/<build_id>/`.
    pub portfolio_output_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            component_registry_path: optional_env("COMPONENT_REGISTRY_PATH"),
            selector_strategy: env_or("SELECTOR_STRATEGY", "smart")
                .parse::<SelectorStrategy>()
                .map_err(anyhow::Error::msg)
                .context("SELECTOR_STRATEGY is invalid")?,
            merge_sparse_sections: parse_bool(&env_or("MERGE_SPARSE_SECTIONS", "false"))
                .context("MERGE_SPARSE_SECTIONS must be true or false")?,
            portfolio_output_dir: optional_env("PORTFOLIO_OUTPUT_DIR"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("'{other}' is not a boolean"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool(" on ").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(!parse_bool("").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
