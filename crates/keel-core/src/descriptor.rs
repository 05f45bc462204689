//! Structured connection descriptor

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A PostgreSQL connection descriptor derived from a connection string.
///
/// Descriptors have no identity or lifecycle of their own: one is recomputed
/// on every call to [`crate::conn_str::parse`] and never cached or mutated in
/// place. The saved-connection entity that persistence works with is a
/// separate type built *from* a descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    /// Host name or address, exactly as it appeared in the input. Parsing
    /// never substitutes a default host; the `localhost` fallback belongs to
    /// display-name generation only.
    pub host: String,

    /// Port number, `5432` when the input carried none.
    pub port: u16,

    /// Database name with the leading slash stripped. May be empty.
    pub database: String,

    /// Username. May be empty.
    pub username: String,

    /// Password from the userinfo section, if one was present. Presence is
    /// meaningful: round-tripping through `build`/`parse` preserves it.
    pub password: Option<String>,

    /// Trailing `?key=value` query parameters (e.g. `sslmode`).
    pub params: HashMap<String, String>,
}

impl ConnectionDescriptor {
    /// SSL mode requested via the `sslmode` query parameter, if any.
    pub fn ssl_mode(&self) -> Option<&str> {
        self.params.get("sslmode").map(String::as_str)
    }

    /// Whether the descriptor carries a password.
    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }
}
