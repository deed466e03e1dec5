//! Classroom service integration tests.

mod support;
mod dispatch;
mod properties;
mod users;
