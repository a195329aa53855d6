//! Shared route definitions for integration tests.

use route_compiler::routing::{Compiler, FlatRoute};

/// The demo API as a hand-built nested tree.
#[allow(dead_code)]
pub fn make_routes<C: Compiler<&'static str>>(dsl: &C) -> C::Out {
    dsl.root(
        "Missing",
        vec![
            dsl.path("/", vec![dsl.get("IndexRender")]),
            dsl.path("/log_in", vec![dsl.get("LogInRender"), dsl.post("LogInProcess")]),
            dsl.path("/sign_up", vec![dsl.get("SignUpRender"), dsl.post("SignUpProcess")]),
            dsl.path(
                "/users",
                vec![
                    dsl.post("ApiCreateUser"),
                    dsl.path("/me", vec![dsl.get("ApiFetchSelf")]),
                    dsl.param(
                        "user_id",
                        vec![
                            dsl.get("ApiFetchUser"),
                            dsl.put("ApiUpdateUser"),
                            dsl.delete("ApiDeleteUser"),
                        ],
                    ),
                ],
            ),
            dsl.path(
                "/pre_match",
                vec![dsl.param(
                    "a",
                    vec![dsl.param("b", vec![dsl.path("/post_match", vec![dsl.get("ParamMatch")])])],
                )],
            ),
        ],
    )
}

/// The same demo API as a flat route list. `/users/me` is declared last on
/// purpose: grouping must still try it before `{user_id}`.
#[allow(dead_code)]
pub fn flat_routes() -> Vec<FlatRoute<&'static str>> {
    vec![
        FlatRoute::get("/", "IndexRender"),
        FlatRoute::get("/log_in", "LogInRender"),
        FlatRoute::post("/log_in", "LogInProcess"),
        FlatRoute::get("/sign_up", "SignUpRender"),
        FlatRoute::post("/sign_up", "SignUpProcess"),
        FlatRoute::post("/users", "ApiCreateUser"),
        FlatRoute::get("/users/{user_id}", "ApiFetchUser"),
        FlatRoute::put("/users/{user_id}", "ApiUpdateUser"),
        FlatRoute::delete("/users/{user_id}", "ApiDeleteUser"),
        FlatRoute::get("/pre_match/{a}/{b}/post_match", "ParamMatch"),
        FlatRoute::get("/users/me", "ApiFetchSelf"),
    ]
}
