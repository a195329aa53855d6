//! Route table validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check method names and path shapes of every row
//! - Detect rows that can never match (duplicate method + path)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteTable → Result<(), Vec<ValidationError>>
//! - Runs before a table is compiled

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::RouteTable;
use crate::routing::flat::validate_path;
use crate::routing::{Method, RouteError};

/// A semantic problem in a route table. `index` is the zero-based row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing endpoint must not be empty")]
    EmptyMissing,

    #[error("route {index}: {source}")]
    Route { index: usize, source: RouteError },

    #[error("route {index}: endpoint must not be empty")]
    EmptyEndpoint { index: usize },

    #[error("route {index}: {method} {path} is already declared by route {first}")]
    Duplicate {
        index: usize,
        first: usize,
        method: String,
        path: String,
    },

    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a route table, collecting every error.
pub fn validate_table(table: &RouteTable) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if table.missing.trim().is_empty() {
        errors.push(ValidationError::EmptyMissing);
    }

    if !LOG_LEVELS.contains(&table.observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::LogLevel(table.observability.log_level.clone()));
    }

    let mut first_seen: HashMap<(&str, &str), usize> = HashMap::new();
    for (index, route) in table.routes.iter().enumerate() {
        if let Err(source) = route.method.parse::<Method>() {
            errors.push(ValidationError::Route { index, source });
        }
        if let Err(source) = validate_path(&route.path) {
            errors.push(ValidationError::Route { index, source });
        }
        if route.endpoint.trim().is_empty() {
            errors.push(ValidationError::EmptyEndpoint { index });
        }

        match first_seen.entry((route.method.as_str(), route.path.as_str())) {
            Entry::Occupied(first) => errors.push(ValidationError::Duplicate {
                index,
                first: *first.get(),
                method: route.method.clone(),
                path: route.path.clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
