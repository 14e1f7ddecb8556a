//! Application Configuration
//!
//! Configuration for the claps application layer.

/// Default per-visitor cap
pub const DEFAULT_MAX_CLAPS: u64 = 10;

/// Claps application configuration
///
/// Immutable once the router is built.
#[derive(Debug, Clone)]
pub struct ClapConfig {
    /// Maximum score one visitor may ever hold for one key
    pub max_claps: u64,
    /// Honor X-Forwarded-For / X-Forwarded-Proto. Enable only behind a proxy
    /// that overwrites them, otherwise visitors can reset their identity.
    pub trust_proxy_headers: bool,
}

impl Default for ClapConfig {
    fn default() -> Self {
        Self {
            max_claps: DEFAULT_MAX_CLAPS,
            trust_proxy_headers: false,
        }
    }
}

impl ClapConfig {
    pub fn new(max_claps: u64) -> Self {
        Self {
            max_claps,
            ..Default::default()
        }
    }

    /// Config for a deployment behind a trusted reverse proxy
    pub fn behind_proxy(self) -> Self {
        Self {
            trust_proxy_headers: true,
            ..self
        }
    }
}
