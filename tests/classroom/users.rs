//! User registration through the shared command dispatcher.

use clazz_cqrs::{ClazzError, RegisterUser, UserRepository};

use crate::support::seeded_app;

#[test]
fn register_and_look_up() {
    let app = seeded_app();
    let registered = app
        .dispatch_command(RegisterUser::new("Grace", " Grace@Navy.mil "))
        .unwrap();
    assert_eq!(registered.email.as_str(), "grace@navy.mil");

    let stored = app.users().find_by_id(registered.id).unwrap().unwrap();
    assert_eq!(stored.name(), "Grace");
}

#[test]
fn duplicate_email_is_conflict() {
    let app = seeded_app();
    app.dispatch_command(RegisterUser::new("Grace", "grace@navy.mil"))
        .unwrap();
    let err = app
        .dispatch_command(RegisterUser::new("Other", "GRACE@navy.mil"))
        .unwrap_err();
    assert!(matches!(err, ClazzError::DuplicateEntity { entity: "User", .. }));
}

#[test]
fn reserved_name_is_invalid() {
    let err = seeded_app()
        .dispatch_command(RegisterUser::new("ADMIN", "ops@example.com"))
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}
