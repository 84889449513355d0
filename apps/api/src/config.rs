use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_JOB_DESCRIPTION_CHARS: usize = 50_000;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Replaces the built-in skill taxonomy when set.
    pub taxonomy_path: Option<PathBuf>,
    /// Upstream size limit on job descriptions accepted by the HTTP layer.
    pub max_job_description_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            taxonomy_path: lookup("ATS_TAXONOMY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            max_job_description_chars: match lookup("ATS_MAX_JOB_DESCRIPTION_CHARS") {
                Some(raw) => raw
                    .parse::<usize>()
                    .ok()
                    .filter(|limit| *limit > 0)
                    .context("ATS_MAX_JOB_DESCRIPTION_CHARS must be a positive integer")?,
                None => DEFAULT_MAX_JOB_DESCRIPTION_CHARS,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            taxonomy_path: None,
            max_job_description_chars: DEFAULT_MAX_JOB_DESCRIPTION_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.taxonomy_path.is_none());
        assert_eq!(config.max_job_description_chars, 50_000);
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("ATS_TAXONOMY_PATH", "/etc/ats/taxonomy.json"),
            ("ATS_MAX_JOB_DESCRIPTION_CHARS", "1000"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.taxonomy_path, Some(PathBuf::from("/etc/ats/taxonomy.json")));
        assert_eq!(config.max_job_description_chars, 1000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_zero_job_description_limit_is_rejected() {
        for raw in ["0", "-5", "lots"] {
            let err = Config::from_lookup(lookup_from(&[("ATS_MAX_JOB_DESCRIPTION_CHARS", raw)]))
                .unwrap_err();
            assert!(err.to_string().contains("positive integer"), "accepted {raw}");
        }
    }

    #[test]
    fn test_blank_taxonomy_path_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("ATS_TAXONOMY_PATH", "  ")])).unwrap();
        assert!(config.taxonomy_path.is_none());
    }
}
