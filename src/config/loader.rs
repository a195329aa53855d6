//! Route table loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RouteTable;
use crate::config::validation::{validate_table, ValidationError};

/// Error type for route table loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Parse and validate a route table from TOML text.
pub fn parse_table(content: &str) -> Result<RouteTable, ConfigError> {
    let table: RouteTable = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_table(&table).map_err(ConfigError::Validation)?;

    Ok(table)
}

/// Load and validate a route table from a TOML file.
pub fn load_table(path: &Path) -> Result<RouteTable, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_table(&content)
}
