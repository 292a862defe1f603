use std::{env, path::PathBuf, time::Duration};

use anyhow::{anyhow, Context, Result};
use reqwest::Client;

use crate::datasources::DOLARAPI_URL;

const USER_AGENT: &str = concat!("DolarBCV Widget ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub timeout: Option<Duration>,
    pub locale: String,
    pub resource_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            api_url: DOLARAPI_URL.to_owned(),
            timeout: None,
            locale: "es_ES".to_owned(),
            resource_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let mut config = Config::default();
        if let Some(url) = lookup("DOLARBCV_API_URL") {
            config.api_url = url;
        }
        if let Some(secs) = lookup("DOLARBCV_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("DOLARBCV_TIMEOUT_SECS is not a number: {:?}", secs))?;
            if secs == 0 {
                return Err(anyhow!("DOLARBCV_TIMEOUT_SECS must be positive"));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(locale) = lookup("DOLARBCV_LOCALE") {
            config.locale = locale;
        }
        config.resource_dir = lookup("DOLARBCV_RESOURCE_DIR").map(PathBuf::from);
        Ok(config)
    }

    pub fn http_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
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
    fn defaults_without_overrides() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "https://ve.dolarapi.com/v1/dolares");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DOLARBCV_API_URL", "http://localhost:8080/v1/dolares"),
            ("DOLARBCV_TIMEOUT_SECS", " 5 "),
            ("DOLARBCV_LOCALE", "es_VE.UTF-8"),
            ("DOLARBCV_RESOURCE_DIR", "/opt/dolarbcv"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/v1/dolares");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.locale, "es_VE.UTF-8");
        assert_eq!(config.resource_dir, Some(PathBuf::from("/opt/dolarbcv")));
    }

    #[test]
    fn rejects_bad_timeouts() {
        assert!(Config::from_lookup(lookup_from(&[("DOLARBCV_TIMEOUT_SECS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("DOLARBCV_TIMEOUT_SECS", "0")])).is_err());
    }

    #[test]
    fn builds_client() {
        let config = Config {
            timeout: Some(Duration::from_secs(3)),
            ..Config::default()
        };
        assert!(config.http_client().is_ok());
    }
}
