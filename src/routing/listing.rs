//! Listing backend: flattens a route tree into resolved routes for display.

use std::fmt;

use serde::Serialize;

use crate::routing::compiler::Compiler;
use crate::routing::method::Method;

/// A single resolved route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescription<E> {
    pub method: Method,
    /// Concatenated literal and parameter segments; parameters render as
    /// `{name}`. Empty for a leaf declared directly under the root.
    pub path: String,
    pub endpoint: E,
}

impl<E> RouteDescription<E> {
    fn prefixed(mut self, prefix: &str) -> Self {
        self.path.insert_str(0, prefix);
        self
    }
}

impl<E: fmt::Display> fmt::Display for RouteDescription<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "{} {} -> {}", self.method, path, self.endpoint)
    }
}

/// Every route of a tree in declaration order, plus its fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing<E> {
    pub missing: E,
    pub routes: Vec<RouteDescription<E>>,
}

/// Compiles route trees into [`Listing`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListingCompiler;

fn prefix_all<E>(prefix: &str, branches: Vec<Vec<RouteDescription<E>>>) -> Vec<RouteDescription<E>> {
    branches
        .into_iter()
        .flatten()
        .map(|description| description.prefixed(prefix))
        .collect()
}

impl<E> Compiler<E> for ListingCompiler {
    type Branch = Vec<RouteDescription<E>>;
    type Out = Listing<E>;

    fn root(&self, missing: E, branches: Vec<Self::Branch>) -> Self::Out {
        let routes: Vec<_> = branches.into_iter().flatten().collect();
        tracing::debug!(routes = routes.len(), "Compiled route listing");
        Listing { missing, routes }
    }

    fn path(&self, prefix: &str, branches: Vec<Self::Branch>) -> Self::Branch {
        prefix_all(prefix, branches)
    }

    fn param(&self, name: &str, branches: Vec<Self::Branch>) -> Self::Branch {
        prefix_all(&format!("/{{{name}}}"), branches)
    }

    fn method(&self, method: Method, endpoint: E) -> Self::Branch {
        vec![RouteDescription {
            method,
            path: String::new(),
            endpoint,
        }]
    }
}
