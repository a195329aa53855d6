//! The interpreter contract every backend implements.
//!
//! A route tree is written once as nested calls against [`Compiler`] and can
//! then be compiled by any backend: the request matcher, the listing, or
//! anything else that supplies a `Branch` and an `Out` type.
//!
//! ```
//! use route_compiler::routing::{Compiler, ListingCompiler, RequestLineCompiler};
//!
//! fn make_routes<C: Compiler<&'static str>>(dsl: &C) -> C::Out {
//!     dsl.root("Missing", vec![
//!         dsl.path("/", vec![dsl.get("IndexRender")]),
//!         dsl.path("/users", vec![
//!             dsl.post("ApiCreateUser"),
//!             dsl.param("user_id", vec![dsl.get("ApiFetchUser")]),
//!         ]),
//!     ])
//! }
//!
//! let matcher = make_routes(&RequestLineCompiler);
//! assert_eq!(matcher.resolve("GET", "/users/1337").endpoint, "ApiFetchUser");
//!
//! let listing = make_routes(&ListingCompiler);
//! assert_eq!(listing.routes[2].path, "/users/{user_id}");
//! ```

use crate::routing::method::Method;

/// One operation per DSL construct, polymorphic over the endpoint type `E`.
///
/// Branch order inside every `branches` argument is significant and must be
/// preserved by implementations.
pub trait Compiler<E> {
    /// Fragment produced by every non-root construct.
    type Branch;

    /// Final artifact produced by [`Compiler::root`].
    type Out;

    /// Builds the final artifact from a fallback endpoint and the top-level
    /// branches.
    fn root(&self, missing: E, branches: Vec<Self::Branch>) -> Self::Out;

    /// Applies `branches` only after the literal `prefix` has been consumed.
    fn path(&self, prefix: &str, branches: Vec<Self::Branch>) -> Self::Branch;

    /// Consumes one `/segment` and binds it to `name` before applying
    /// `branches`.
    fn param(&self, name: &str, branches: Vec<Self::Branch>) -> Self::Branch;

    /// Leaf binding `method` to `endpoint`.
    fn method(&self, method: Method, endpoint: E) -> Self::Branch;

    fn get(&self, endpoint: E) -> Self::Branch {
        self.method(Method::Get, endpoint)
    }

    fn post(&self, endpoint: E) -> Self::Branch {
        self.method(Method::Post, endpoint)
    }

    fn put(&self, endpoint: E) -> Self::Branch {
        self.method(Method::Put, endpoint)
    }

    fn delete(&self, endpoint: E) -> Self::Branch {
        self.method(Method::Delete, endpoint)
    }

    fn options(&self, endpoint: E) -> Self::Branch {
        self.method(Method::Options, endpoint)
    }

    fn patch(&self, endpoint: E) -> Self::Branch {
        self.method(Method::Patch, endpoint)
    }

    fn head(&self, endpoint: E) -> Self::Branch {
        self.method(Method::Head, endpoint)
    }

    fn connect(&self, endpoint: E) -> Self::Branch {
        self.method(Method::Connect, endpoint)
    }

    fn trace(&self, endpoint: E) -> Self::Branch {
        self.method(Method::Trace, endpoint)
    }
}
