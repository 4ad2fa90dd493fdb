use std::env;
use std::time::Duration;

use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.etherscan.io/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub request_timeout: Duration,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid ETHERSCAN_API_URL {value:?}: {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid ETHERSCAN_TIMEOUT_SECS {0:?}, expected a positive number of seconds")]
    InvalidTimeout(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url =
            lookup("ETHERSCAN_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidApiUrl {
            value: raw_url.clone(),
            source,
        })?;

        let request_timeout = match lookup("ETHERSCAN_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_url,
            request_timeout,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("ETHERSCAN_API_URL", "https://api-sepolia.etherscan.io/api"),
            ("ETHERSCAN_TIMEOUT_SECS", " 5 "),
        ]))
        .unwrap();
        assert_eq!(config.api_url.host_str(), Some("api-sepolia.etherscan.io"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_url() {
        let err = Config::from_lookup(lookup_from(&[("ETHERSCAN_API_URL", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiUrl { .. }));
    }

    #[test]
    fn rejects_zero_and_garbage_timeouts() {
        for raw in ["0", "-3", "soon"] {
            let err = Config::from_lookup(lookup_from(&[("ETHERSCAN_TIMEOUT_SECS", raw)]))
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout(ref v) if v == raw));
        }
    }
}
