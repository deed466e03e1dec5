//! The classroom aggregate and the view handed back to callers.

mod clazz;
mod view;

pub use clazz::Clazz;
pub(crate) use clazz::normalize_name;
pub use view::ClazzView;
