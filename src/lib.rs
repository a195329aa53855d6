//! Route definition DSL with swappable compilers.
//!
//! A route tree is written once against [`routing::Compiler`] and compiled
//! by whichever backend the caller picks: a live request matcher, a listing
//! of resolved routes, or, through [`routing::FlatRouteCompiler`], from a
//! flat route table loaded by [`config`].

pub mod config;
pub mod routing;

pub use config::RouteTable;
pub use routing::{
    Compiler, FlatRoute, FlatRouteCompiler, ListingCompiler, Match, Method, RequestLine,
    RequestLineCompiler, RequestMatcher,
};
