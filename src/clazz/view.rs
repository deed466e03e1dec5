use serde::Serialize;

use super::Clazz;

/// Result object returned by the classroom handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClazzView {
    pub id: u32,
    pub name: String,
}

impl From<&Clazz> for ClazzView {
    fn from(clazz: &Clazz) -> Self {
        ClazzView {
            id: clazz.id(),
            name: clazz.name().to_string(),
        }
    }
}

impl From<Clazz> for ClazzView {
    fn from(clazz: Clazz) -> Self {
        ClazzView::from(&clazz)
    }
}
