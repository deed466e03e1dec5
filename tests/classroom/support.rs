//! Shared setup for the classroom suite.

use clazz_cqrs::{App, AppConfig, ClazzView};

pub fn seeded_app() -> App {
    App::new(&AppConfig::default()).unwrap()
}

pub fn empty_app() -> App {
    App::new(&AppConfig::default().without_seed()).unwrap()
}

pub fn seeded_views() -> Vec<ClazzView> {
    (1..=3)
        .map(|i| ClazzView {
            id: i,
            name: format!("Class {}", i),
        })
        .collect()
}
