//! Routing through the assembled dispatchers.

use clazz_cqrs::{
    ClazzError, Command, CommandDispatcher, CreateClazz, GetAllClazzes, GetClazzById, Query,
    QueryDispatcher,
};

use crate::support::{empty_app, seeded_app};

struct DeleteClazz {
    #[allow(dead_code)]
    id: u32,
}

impl Command for DeleteClazz {
    type Output = ();
}

struct CountClazzes;

impl Query for CountClazzes {
    type Output = usize;
}

#[test]
fn create_then_fetch_through_dispatchers() {
    let app = seeded_app();

    let created = app.dispatch_command(CreateClazz::new("  Geography ")).unwrap();
    assert_eq!(created.name, "Geography");

    let fetched = app.dispatch_query(GetClazzById::new(created.id)).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn unregistered_command_is_handler_not_found() {
    let app = seeded_app();
    let err = app.dispatch_command(DeleteClazz { id: 1 }).unwrap_err();
    match err {
        ClazzError::HandlerNotFound { kind, request_type } => {
            assert_eq!(kind, "command");
            assert!(request_type.ends_with("DeleteClazz"));
        }
        other => panic!("expected HandlerNotFound, got {other:?}"),
    }
    assert_eq!(
        app.dispatch_command(DeleteClazz { id: 1 })
            .unwrap_err()
            .status_code(),
        500
    );
}

#[test]
fn unregistered_query_is_handler_not_found() {
    let err = empty_app().dispatch_query(CountClazzes).unwrap_err();
    assert!(matches!(
        err,
        ClazzError::HandlerNotFound { kind: "query", .. }
    ));
}

#[test]
fn queries_are_not_routed_through_the_command_table() {
    let commands = CommandDispatcher::builder().build().unwrap();
    let queries = QueryDispatcher::builder()
        .handler_fn(|_: GetAllClazzes| Ok(Vec::new()))
        .build()
        .unwrap();

    assert!(commands.commands().is_empty());
    assert!(queries.dispatch(GetAllClazzes).unwrap().is_empty());
}

#[test]
fn handler_errors_pass_through_unchanged() {
    let app = seeded_app();
    let err = app.dispatch_query(GetClazzById::new(42)).unwrap_err();
    assert_eq!(err, ClazzError::not_found("Clazz", 42));
}

#[test]
fn dispatchers_list_their_request_types() {
    let app = seeded_app();
    let commands = app.commands().commands();
    let queries = app.queries().queries();
    assert_eq!(commands.len(), 2);
    assert_eq!(queries.len(), 2);
    assert!(commands.iter().any(|name| name.ends_with("CreateClazz")));
    assert!(queries.iter().any(|name| name.ends_with("GetClazzById")));
}
