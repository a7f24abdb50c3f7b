//! Driving port for reading students.

use async_trait::async_trait;

use crate::domain::{Error, StudentId, dto::StudentDto};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentsQuery: Send + Sync {
    /// Every student, ordered by identifier.
    async fn list_students(&self) -> Result<Vec<StudentDto>, Error>;

    /// A single student, or `not_found`.
    async fn get_student(&self, id: StudentId) -> Result<StudentDto, Error>;
}
