//! Grouping a flat route list must behave exactly like the hand-built tree.

use proptest::prelude::*;
use route_compiler::routing::{
    FlatRouteCompiler, ListingCompiler, Method, RequestLineCompiler, RouteDescription,
};

mod common;

const METHODS: &[&str] = &[
    "GET", "POST", "PUT", "DELETE", "OPTIONS", "PATCH", "HEAD", "CONNECT", "TRACE", "PURGE",
];

const SEGMENTS: &[&str] = &[
    "", "users", "me", "1337", "log_in", "sign_up", "pre_match", "post_match", "x", "userx",
];

proptest! {
    #[test]
    fn test_flat_and_nested_trees_agree(
        method in prop::sample::select(METHODS),
        segments in prop::collection::vec(prop::sample::select(SEGMENTS), 0..6),
    ) {
        let nested = common::make_routes(&RequestLineCompiler);
        let flat = FlatRouteCompiler::new(RequestLineCompiler)
            .root("Missing", common::flat_routes())
            .unwrap();

        let path = format!("/{}", segments.join("/"));
        prop_assert_eq!(nested.resolve(method, &path), flat.resolve(method, &path));
    }
}

#[test]
fn test_grouped_listing_matches_nested_listing() {
    let nested = common::make_routes(&ListingCompiler);
    let flat = FlatRouteCompiler::new(ListingCompiler)
        .root("Missing", common::flat_routes())
        .unwrap();

    assert_eq!(nested, flat);
    assert_eq!(
        flat.routes[6],
        RouteDescription {
            method: Method::Get,
            path: "/users/me".to_string(),
            endpoint: "ApiFetchSelf",
        }
    );
}

#[test]
fn test_literal_wins_over_param_regardless_of_declaration_order() {
    let flat = FlatRouteCompiler::new(RequestLineCompiler)
        .root("Missing", common::flat_routes())
        .unwrap();

    let result = flat.resolve("GET", "/users/me");
    assert_eq!(result.endpoint, "ApiFetchSelf");
    assert!(result.params.is_empty());

    let result = flat.resolve("GET", "/users/you");
    assert_eq!(result.endpoint, "ApiFetchUser");
    assert_eq!(result.params["user_id"], "you");
}
