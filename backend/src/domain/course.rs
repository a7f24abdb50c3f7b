//! Course entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned course identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(i64);

impl CourseId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for CourseId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Course record; `id` stays `None` until inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: Option<CourseId>,
    pub name: String,
    pub description: String,
}

impl Course {
    /// Build an unsaved course.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }

    /// The same course carrying a storage-assigned identifier.
    #[must_use]
    pub fn with_id(mut self, id: CourseId) -> Self {
        self.id = Some(id);
        self
    }
}
