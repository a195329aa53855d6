//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route definition (at startup):
//!     nested Compiler calls            flat (method, path, endpoint) list
//!             │                                   │
//!             │                        flat.rs (group by next segment)
//!             │                                   │
//!             └──────────────┬────────────────────┘
//!                            ▼
//!                 any Compiler backend
//!                 ├── matcher.rs → RequestMatcher (immutable, Arc-shared)
//!                 └── listing.rs → Listing (resolved routes)
//!
//! Per request:
//!     RequestLine (method, path)
//!     → RequestMatcher (ordered backtracking)
//!     → Match { endpoint, params } or the fallback endpoint
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex: literal byte prefixes and single-segment captures only
//! - Deterministic: same tree and request always give the same match
//! - First declared wins; flat groups put literals before parameters

pub mod compiler;
pub mod error;
pub mod flat;
pub mod listing;
pub mod matcher;
pub mod method;

pub use compiler::Compiler;
pub use error::RouteError;
pub use flat::{FlatRoute, FlatRouteCompiler};
pub use listing::{Listing, ListingCompiler, RouteDescription};
pub use matcher::{Match, Params, RequestLine, RequestLineCompiler, RequestMatcher};
pub use method::Method;
