//! Route tables loaded from disk and compiled by every backend.

use std::io::Write;

use route_compiler::config::{load_table, ConfigError};
use route_compiler::routing::{FlatRouteCompiler, ListingCompiler, RequestLineCompiler};

const TABLE: &str = r#"
missing = "NotFound"

[[routes]]
method = "GET"
path = "/"
endpoint = "Index"

[[routes]]
method = "GET"
path = "/users/{user_id}"
endpoint = "FetchUser"

[[routes]]
method = "DELETE"
path = "/users/{user_id}"
endpoint = "DeleteUser"

[[routes]]
method = "GET"
path = "/users/{user_id}/posts/{post_id}"
endpoint = "FetchPost"
"#;

fn write_table(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_table_compiles_to_matcher() {
    let file = write_table(TABLE);
    let table = load_table(file.path()).unwrap();

    let matcher = FlatRouteCompiler::new(RequestLineCompiler)
        .root(table.missing.clone(), table.flat_routes().unwrap())
        .unwrap();

    let result = matcher.resolve("GET", "/users/7/posts/99");
    assert_eq!(result.endpoint, "FetchPost");
    let params: Vec<(&str, &str)> = result
        .params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(params, [("user_id", "7"), ("post_id", "99")]);

    assert_eq!(matcher.resolve("DELETE", "/users/7").endpoint, "DeleteUser");
    assert_eq!(matcher.resolve("GET", "/nope").endpoint, "NotFound");
}

#[test]
fn test_table_compiles_to_listing() {
    let file = write_table(TABLE);
    let table = load_table(file.path()).unwrap();

    let listing = FlatRouteCompiler::new(ListingCompiler)
        .root(table.missing.clone(), table.flat_routes().unwrap())
        .unwrap();

    let rendered: Vec<String> = listing.routes.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "GET / -> Index",
            "GET /users/{user_id} -> FetchUser",
            "DELETE /users/{user_id} -> DeleteUser",
            "GET /users/{user_id}/posts/{post_id} -> FetchPost",
        ]
    );

    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["missing"], "NotFound");
    assert_eq!(json["routes"][1]["method"], "GET");
    assert_eq!(json["routes"][1]["path"], "/users/{user_id}");
}

#[test]
fn test_invalid_table_is_rejected() {
    let file = write_table(
        r#"
[[routes]]
method = "GET"
path = "/users/{id"
endpoint = "Broken"
"#,
    );

    let err = load_table(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
    assert!(err.to_string().contains("unbalanced braces"));
}
