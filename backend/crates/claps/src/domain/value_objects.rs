//! Domain Value Objects
//!
//! Immutable value types for the claps domain.

use std::fmt;

/// Namespace prefix of every clap key in the store
pub const KEY_PREFIX: &str = "CLAP:";

/// Anonymized visitor identity - base64 SHA-256 of the raw client address
///
/// Deterministic and one-way. Distinct addresses may collide in theory;
/// that is accepted, the identity is not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitorId(String);

impl VisitorId {
    /// Hash a raw network address (e.g. `"203.0.113.7"`)
    pub fn from_address(raw_address: &str) -> Self {
        Self(platform::crypto::sha256_base64(raw_address.as_bytes()))
    }

    /// Wrap an already hashed identity, as read back from the store
    pub fn from_hashed(hashed: impl Into<String>) -> Self {
        Self(hashed.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Origin and path of the request URL, used when no explicit key is given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    /// `scheme://host[:port]`
    pub origin: String,
    /// Path without query string
    pub path: String,
}

impl RequestUrl {
    pub fn new(origin: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            path: path.into(),
        }
    }
}

/// Store key of one clappable resource, always prefixed with [`KEY_PREFIX`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Resolve the key from an explicit `key` parameter, or the request URL
    ///
    /// An empty explicit key counts as absent.
    pub fn resolve(explicit_key: Option<&str>, url: &RequestUrl) -> Self {
        match explicit_key.filter(|k| !k.is_empty()) {
            Some(key) => Self(format!("{KEY_PREFIX}{key}")),
            None => Self(format!("{KEY_PREFIX}{}{}", url.origin, url.path)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
