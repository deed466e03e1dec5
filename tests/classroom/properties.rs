//! Observable guarantees of the classroom store and its use cases.

use clazz_cqrs::{
    App, AppConfig, Clazz, ClazzError, CreateClazz, ExistsByName, FindAll, FindById, GetAllClazzes,
    GetClazzById, InMemoryClazzRepository, InMemoryUserRepository, Save,
};

use crate::support::{seeded_app, seeded_views};

#[test]
fn save_then_find_returns_trimmed_name() {
    let repo = InMemoryClazzRepository::new();
    for (id, raw) in [(1, "Math"), (2, "  Art"), (3, "Music  "), (4, "\tDrama\n")] {
        repo.save(Clazz::new(id, raw).unwrap()).unwrap();
        let found = repo.find_by_id(id).unwrap().unwrap();
        assert_eq!(found.id(), id);
        assert_eq!(found.name(), raw.trim());
    }
}

#[test]
fn repeated_save_leaves_one_entry() {
    let repo = InMemoryClazzRepository::seeded().unwrap();
    let clazz = Clazz::new(2, "Class 2").unwrap();
    repo.save(clazz.clone()).unwrap();
    repo.save(clazz).unwrap();
    let all = repo.find_all().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all.iter().filter(|c| c.id() == 2).count(), 1);
}

#[test]
fn created_name_is_found_case_insensitively() {
    let repo = InMemoryClazzRepository::seeded().unwrap();
    let app = App::with_repositories(
        &AppConfig::default(),
        repo.clone(),
        InMemoryUserRepository::new(),
    )
    .unwrap();

    app.dispatch_command(CreateClazz::new("Math")).unwrap();
    assert!(repo.exists_by_name("math").unwrap());
    assert!(app.clazzes().exists_by_name("MATH").unwrap());
}

#[test]
fn whitespace_name_is_invalid_and_trailing_space_is_trimmed() {
    let app = seeded_app();
    let err = app.dispatch_command(CreateClazz::new("  ")).unwrap_err();
    assert!(matches!(err, ClazzError::InvalidArgument(_)));

    let created = app.dispatch_command(CreateClazz::new("Biology ")).unwrap();
    assert_eq!(created.name, "Biology");
}

#[test]
fn second_create_differing_only_by_case_is_duplicate() {
    let app = seeded_app();
    app.dispatch_command(CreateClazz::new("Art")).unwrap();
    let err = app.dispatch_command(CreateClazz::new("art")).unwrap_err();
    assert!(matches!(err, ClazzError::DuplicateEntity { .. }));
}

#[test]
fn unknown_id_is_not_found_with_that_id() {
    let app = seeded_app();
    match app.dispatch_query(GetClazzById::new(9999)).unwrap_err() {
        ClazzError::NotFound { id, .. } => assert_eq!(id, "9999"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn listing_after_seed_and_after_create() {
    let app = seeded_app();
    assert_eq!(app.dispatch_query(GetAllClazzes).unwrap(), seeded_views());

    let created = app.dispatch_command(CreateClazz::new("Physics")).unwrap();
    let listed = app.dispatch_query(GetAllClazzes).unwrap();
    assert_eq!(listed.len(), 4);
    assert_eq!(&listed[..3], &seeded_views()[..]);
    assert_eq!(listed.last(), Some(&created));
}

#[test]
fn generated_ids_never_collide_with_seeded_ones() {
    let app = seeded_app();
    let first = app.dispatch_command(CreateClazz::new("A")).unwrap();
    let second = app.dispatch_command(CreateClazz::new("B")).unwrap();
    assert_eq!(first.id, 1001);
    assert_eq!(second.id, 1002);
}

#[test]
fn id_floor_at_max_fails_without_touching_seeded_data() {
    let app = App::new(&AppConfig::default().with_id_floor(u32::MAX)).unwrap();
    let err = app.dispatch_command(CreateClazz::new("Art")).unwrap_err();
    assert_eq!(err, ClazzError::IdsExhausted { entity: "Clazz" });
    assert_eq!(app.dispatch_query(GetAllClazzes).unwrap(), seeded_views());
}

#[test]
fn stored_max_id_stops_generation() {
    let repo = InMemoryClazzRepository::seeded().unwrap();
    repo.save(Clazz::new(u32::MAX, "Last").unwrap()).unwrap();
    let app = App::with_repositories(&AppConfig::default(), repo, InMemoryUserRepository::new())
        .unwrap();

    let err = app.dispatch_command(CreateClazz::new("Art")).unwrap_err();
    assert_eq!(err.status_code(), 500);
    assert_eq!(app.dispatch_query(GetAllClazzes).unwrap().len(), 4);
    assert_eq!(
        app.dispatch_query(GetClazzById::new(1)).unwrap().name,
        "Class 1"
    );
}

#[test]
fn concurrent_creates_of_distinct_names_all_land() {
    let app = seeded_app();
    std::thread::scope(|scope| {
        for t in 0..4 {
            let app = &app;
            scope.spawn(move || {
                for i in 0..25 {
                    app.dispatch_command(CreateClazz::new(format!("t{t}-{i}")))
                        .unwrap();
                }
            });
        }
    });

    let listed = app.dispatch_query(GetAllClazzes).unwrap();
    assert_eq!(listed.len(), 103);
    let mut ids: Vec<u32> = listed.iter().map(|v| v.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 103);
}

#[test]
fn concurrent_creates_of_one_name_keep_names_unique() {
    let app = seeded_app();
    let successes = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let app = &app;
                scope.spawn(move || app.dispatch_command(CreateClazz::new("History")).is_ok())
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count()
    });
    assert_eq!(successes, 1);
    assert_eq!(app.dispatch_query(GetAllClazzes).unwrap().len(), 4);
}
