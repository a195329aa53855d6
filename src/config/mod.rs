//! Route table configuration.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouteTable (validated, immutable)
//!     → RouteTable::flat_routes()
//!     → routing::FlatRouteCompiler
//! ```
//!
//! # Design Decisions
//! - A table is immutable once loaded; changes require a reload
//! - All fields have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_table, parse_table, ConfigError};
pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::RouteTable;
pub use validation::ValidationError;
