//! Server configuration from the environment

use claps::ClapConfig;
use claps::application::config::DEFAULT_MAX_CLAPS;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 31113;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` runs on the in-memory store
    pub redis_url: Option<String>,
    pub frontend_origins: Vec<String>,
    pub claps: ClapConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let max_claps = parse_or("MAX_CLAPS", lookup("MAX_CLAPS"), DEFAULT_MAX_CLAPS)?;
        let trust_proxy = parse_or("TRUST_PROXY_HEADERS", lookup("TRUST_PROXY_HEADERS"), false)?;

        let mut claps = ClapConfig::new(max_claps);
        if trust_proxy {
            claps = claps.behind_proxy();
        }

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?,
            redis_url: lookup("REDIS_URL").filter(|url| !url.trim().is_empty()),
            frontend_origins,
            claps,
        })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        None => {
            tracing::debug!("{key} not set, using default");
            Ok(default)
        }
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {key} value {value:?}: {e}")),
    }
}
