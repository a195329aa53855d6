//! Flat-route grouping backend.
//!
//! Rebuilds a route tree from an ordered list of `(method, path, endpoint)`
//! triples by grouping routes on their next path segment, then emits that
//! tree into any [`Compiler`].
//!
//! # Ordering
//! Within one level, literal segment groups and the terminal group (routes
//! whose path ends here) are emitted in first-seen order. Parameter groups
//! always come after them, so `/users/me` is tried before `/users/{id}` no
//! matter which was declared first. Routes inside a group keep input order.

use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::routing::compiler::Compiler;
use crate::routing::error::RouteError;
use crate::routing::method::Method;

/// A single fully specified route, e.g. `GET /users/{user_id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRoute<E> {
    method: Method,
    path: String,
    endpoint: E,
}

impl<E> FlatRoute<E> {
    pub fn new(method: Method, path: impl Into<String>, endpoint: E) -> Self {
        Self {
            method,
            path: path.into(),
            endpoint,
        }
    }

    /// Builds a route from method text, rejecting unknown methods and
    /// malformed paths immediately.
    pub fn parse(method: &str, path: impl Into<String>, endpoint: E) -> Result<Self, RouteError> {
        let method = method.parse()?;
        let path = path.into();
        validate_path(&path)?;
        Ok(Self::new(method, path, endpoint))
    }

    pub fn get(path: impl Into<String>, endpoint: E) -> Self {
        Self::new(Method::Get, path, endpoint)
    }

    pub fn post(path: impl Into<String>, endpoint: E) -> Self {
        Self::new(Method::Post, path, endpoint)
    }

    pub fn put(path: impl Into<String>, endpoint: E) -> Self {
        Self::new(Method::Put, path, endpoint)
    }

    pub fn delete(path: impl Into<String>, endpoint: E) -> Self {
        Self::new(Method::Delete, path, endpoint)
    }

    pub fn options(path: impl Into<String>, endpoint: E) -> Self {
        Self::new(Method::Options, path, endpoint)
    }

    pub fn patch(path: impl Into<String>, endpoint: E) -> Self {
        Self::new(Method::Patch, path, endpoint)
    }

    pub fn head(path: impl Into<String>, endpoint: E) -> Self {
        Self::new(Method::Head, path, endpoint)
    }

    pub fn connect(path: impl Into<String>, endpoint: E) -> Self {
        Self::new(Method::Connect, path, endpoint)
    }

    pub fn trace(path: impl Into<String>, endpoint: E) -> Self {
        Self::new(Method::Trace, path, endpoint)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Literal(String),
    Param(String),
}

impl Segment {
    fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

fn parse_segment(path: &str, segment: &str) -> Result<Segment, RouteError> {
    let malformed = || RouteError::MalformedSegment {
        path: path.to_string(),
        segment: segment.to_string(),
    };

    match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some("") => Err(RouteError::EmptyParamName(path.to_string())),
        Some(name) if name.contains(['{', '}']) => Err(malformed()),
        Some(name) => Ok(Segment::Param(name.to_string())),
        None if segment.contains(['{', '}']) => Err(malformed()),
        None => Ok(Segment::Literal(segment.to_string())),
    }
}

fn split_path(path: &str) -> Result<VecDeque<Segment>, RouteError> {
    let rest = path
        .strip_prefix('/')
        .ok_or_else(|| RouteError::MissingLeadingSlash(path.to_string()))?;
    rest.split('/')
        .map(|segment| parse_segment(path, segment))
        .collect()
}

/// Checks that `path` is absolute and that every `{...}` placeholder spans a
/// whole, named segment.
pub fn validate_path(path: &str) -> Result<(), RouteError> {
    split_path(path).map(|_| ())
}

/// A route part-way through grouping: the segments not yet consumed.
struct Pending<E> {
    method: Method,
    segments: VecDeque<Segment>,
    endpoint: E,
}

/// Compiles flat route lists into any [`Compiler`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatRouteCompiler<C> {
    compiler: C,
}

impl<C> FlatRouteCompiler<C> {
    pub fn new(compiler: C) -> Self {
        Self { compiler }
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Groups `routes` into a tree and compiles it under `missing`.
    ///
    /// Every path is validated before anything is emitted.
    pub fn root<E>(&self, missing: E, routes: Vec<FlatRoute<E>>) -> Result<C::Out, RouteError>
    where
        C: Compiler<E>,
    {
        let route_count = routes.len();
        let pending = routes
            .into_iter()
            .map(|route| {
                Ok(Pending {
                    method: route.method,
                    segments: split_path(&route.path)?,
                    endpoint: route.endpoint,
                })
            })
            .collect::<Result<Vec<_>, RouteError>>()?;

        let branches = self.compile_level(pending);
        tracing::debug!(
            routes = route_count,
            branches = branches.len(),
            "Grouped flat routes"
        );
        Ok(self.compiler.root(missing, branches))
    }

    fn compile_level<E>(&self, routes: Vec<Pending<E>>) -> Vec<C::Branch>
    where
        C: Compiler<E>,
    {
        let mut groups: IndexMap<Option<Segment>, Vec<Pending<E>>> = IndexMap::new();
        for mut route in routes {
            let head = route.segments.pop_front();
            groups.entry(head).or_default().push(route);
        }

        let (params, others): (Vec<_>, Vec<_>) = groups
            .into_iter()
            .partition(|(head, _)| head.as_ref().is_some_and(Segment::is_param));

        let mut branches = Vec::new();
        for (head, children) in others.into_iter().chain(params) {
            match head {
                None => branches.extend(
                    children
                        .into_iter()
                        .map(|leaf| self.compiler.method(leaf.method, leaf.endpoint)),
                ),
                Some(Segment::Literal(literal)) => {
                    let nested = self.compile_level(children);
                    branches.push(self.compiler.path(&format!("/{literal}"), nested));
                }
                Some(Segment::Param(name)) => {
                    let nested = self.compile_level(children);
                    branches.push(self.compiler.param(&name, nested));
                }
            }
        }
        branches
    }
}
