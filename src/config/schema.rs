//! Route table schema definitions.
//!
//! A route table is the file form of a flat route list. All types derive
//! Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::routing::{FlatRoute, RouteError};

/// Root of a route table file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteTable {
    /// Endpoint returned when no route matches.
    pub missing: String,

    /// Routes in match-attempt order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            missing: "NotFound".to_string(),
            routes: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl RouteTable {
    /// Converts the table rows into flat routes, in file order.
    pub fn flat_routes(&self) -> Result<Vec<FlatRoute<String>>, RouteError> {
        self.routes
            .iter()
            .map(|route| FlatRoute::parse(&route.method, route.path.as_str(), route.endpoint.clone()))
            .collect()
    }
}

/// A single `(method, path, endpoint)` row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Upper-case HTTP method, e.g. `GET`.
    pub method: String,

    /// Absolute path; `{name}` segments capture parameters.
    pub path: String,

    /// Endpoint tag the route resolves to.
    pub endpoint: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
