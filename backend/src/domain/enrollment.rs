//! Enrollment join record.
//!
//! An enrollment links exactly one student to exactly one course. The pair
//! is unique: a student holds at most one enrollment per course. Records are
//! only created through the enroll use-case and only removed when their
//! student or course is deleted.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Course, Student};

/// Storage-assigned enrollment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnrollmentId(i64);

impl EnrollmentId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EnrollmentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EnrollmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Enrollment with both sides loaded.
///
/// The student and course are non-owning snapshots taken when the
/// enrollment was read; they are never fetched lazily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student: Student,
    pub course: Course,
}
