//! Student entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for StudentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Student record.
///
/// Field contents are unchecked here; [`crate::domain::validation`] decides
/// whether a record may be persisted. `id` is `None` until storage assigns
/// one on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: Option<StudentId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Student {
    /// Build an unsaved student.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Attach a storage identifier.
    #[must_use]
    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = Some(id);
        self
    }
}
