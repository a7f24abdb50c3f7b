//! Driven port for course storage.

use async_trait::async_trait;

use crate::domain::{Course, CourseId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by course repository adapters.
    pub enum CourseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "course repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "course repository query failed: {message}",
    }
}

/// Course persistence contract, mirroring [`super::StudentRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Course>, CourseRepositoryError>;

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError>;

    async fn insert(&self, course: &Course) -> Result<Course, CourseRepositoryError>;

    async fn update(
        &self,
        id: CourseId,
        course: &Course,
    ) -> Result<Option<Course>, CourseRepositoryError>;

    /// Delete a course and every enrollment referencing it.
    async fn delete(&self, id: CourseId) -> Result<bool, CourseRepositoryError>;
}
