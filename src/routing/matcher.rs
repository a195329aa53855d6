//! Request matcher backend.
//!
//! # Responsibilities
//! - Compile a route tree into an immutable [`RequestMatcher`]
//! - Resolve `(method, path)` pairs to an endpoint plus captured parameters
//! - Fall back to the root's missing endpoint when nothing matches
//!
//! # Design Decisions
//! - Depth-first, left-to-right backtracking; first full match wins
//! - Literal prefixes are exact byte prefixes, no normalization
//! - A parameter captures exactly one segment (up to the next `/`)
//! - Captures are collected while unwinding a successful chain only, so a
//!   failed subtree never leaks parameters
//! - The compiled tree is shared behind an `Arc` and never mutated

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::routing::compiler::Compiler;
use crate::routing::error::RouteError;
use crate::routing::method::Method;

/// Captured parameters, outermost parameter first.
pub type Params = IndexMap<String, String>;

/// An incoming request reduced to what routing looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
}

impl RequestLine {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

impl FromStr for RequestLine {
    type Err = RouteError;

    /// Parses `"<METHOD> <PATH>"`, e.g. `GET /users/1337`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(method), Some(path), None) if path.starts_with('/') => {
                Ok(Self::new(method, path))
            }
            _ => Err(RouteError::MalformedRequestLine(s.to_string())),
        }
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Result of resolving a request line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match<E> {
    pub endpoint: E,
    pub params: Params,
}

#[derive(Debug)]
enum Node<E> {
    Path { prefix: String, children: Vec<Node<E>> },
    Param { name: String, children: Vec<Node<E>> },
    Leaf { method: Method, endpoint: E },
}

/// Compiled fragment produced by [`RequestLineCompiler`].
#[derive(Debug)]
pub struct MatchBranch<E>(Node<E>);

fn unwrap_branches<E>(branches: Vec<MatchBranch<E>>) -> Vec<Node<E>> {
    branches.into_iter().map(|MatchBranch(node)| node).collect()
}

/// Compiles route trees into [`RequestMatcher`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestLineCompiler;

impl<E> Compiler<E> for RequestLineCompiler {
    type Branch = MatchBranch<E>;
    type Out = RequestMatcher<E>;

    fn root(&self, missing: E, branches: Vec<Self::Branch>) -> Self::Out {
        let branches = unwrap_branches(branches);
        tracing::debug!(branches = branches.len(), "Compiled request matcher");
        RequestMatcher {
            inner: Arc::new(Tree { missing, branches }),
        }
    }

    fn path(&self, prefix: &str, branches: Vec<Self::Branch>) -> Self::Branch {
        MatchBranch(Node::Path {
            prefix: prefix.to_string(),
            children: unwrap_branches(branches),
        })
    }

    fn param(&self, name: &str, branches: Vec<Self::Branch>) -> Self::Branch {
        MatchBranch(Node::Param {
            name: name.to_string(),
            children: unwrap_branches(branches),
        })
    }

    fn method(&self, method: Method, endpoint: E) -> Self::Branch {
        MatchBranch(Node::Leaf { method, endpoint })
    }
}

#[derive(Debug)]
struct Tree<E> {
    missing: E,
    branches: Vec<Node<E>>,
}

/// A compiled, immutable request matcher.
///
/// Cloning is cheap and shares the compiled tree. The matcher holds no
/// mutable state, so it can be called from any number of threads at once.
#[derive(Debug)]
pub struct RequestMatcher<E> {
    inner: Arc<Tree<E>>,
}

impl<E> Clone for RequestMatcher<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Clone> RequestMatcher<E> {
    /// Resolves a request line. Never fails: an unmatched request yields the
    /// missing endpoint with no parameters.
    pub fn matches(&self, line: &RequestLine) -> Match<E> {
        self.resolve(&line.method, &line.path)
    }

    pub fn resolve(&self, method: &str, path: &str) -> Match<E> {
        match first_hit(&self.inner.branches, method, path) {
            Some(hit) => {
                tracing::trace!(method, path, params = hit.captures.len(), "Route matched");
                Match {
                    endpoint: hit.endpoint.clone(),
                    params: hit.into_params(),
                }
            }
            None => {
                tracing::trace!(method, path, "No route matched, using fallback");
                Match {
                    endpoint: self.inner.missing.clone(),
                    params: Params::new(),
                }
            }
        }
    }
}

impl<E> RequestMatcher<E> {
    /// The fallback endpoint.
    pub fn missing(&self) -> &E {
        &self.inner.missing
    }
}

/// A successful match before endpoint cloning. `captures` is innermost first.
struct Hit<'t, 'p, E> {
    endpoint: &'t E,
    captures: Vec<(&'t str, &'p str)>,
}

impl<E> Hit<'_, '_, E> {
    fn into_params(self) -> Params {
        let mut params = Params::with_capacity(self.captures.len());
        // Outermost binding of a repeated name wins.
        for (name, value) in self.captures.into_iter().rev() {
            params
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }
        params
    }
}

fn first_hit<'t, 'p, E>(
    nodes: &'t [Node<E>],
    method: &str,
    remaining: &'p str,
) -> Option<Hit<'t, 'p, E>> {
    nodes
        .iter()
        .find_map(|node| try_node(node, method, remaining))
}

fn try_node<'t, 'p, E>(
    node: &'t Node<E>,
    method: &str,
    remaining: &'p str,
) -> Option<Hit<'t, 'p, E>> {
    match node {
        Node::Leaf {
            method: target,
            endpoint,
        } => (remaining.is_empty() && target.as_str() == method).then(|| Hit {
            endpoint,
            captures: Vec::new(),
        }),
        Node::Path { prefix, children } => {
            let rest = remaining.strip_prefix(prefix.as_str())?;
            first_hit(children, method, rest)
        }
        Node::Param { name, children } => {
            let tail = remaining.strip_prefix('/')?;
            let (captured, rest) = match tail.find('/') {
                Some(slash) => tail.split_at(slash),
                None => (tail, ""),
            };
            let mut hit = first_hit(children, method, rest)?;
            hit.captures.push((name.as_str(), captured));
            Some(hit)
        }
    }
}
