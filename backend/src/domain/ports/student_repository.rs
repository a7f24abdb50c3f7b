//! Driven port for student storage.

use async_trait::async_trait;

use crate::domain::{Student, StudentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "student repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "student repository query failed: {message}",
        /// The unique email constraint rejected a write.
        DuplicateEmail { email: String } => "email already in use: {email}",
    }
}

/// Student persistence contract.
///
/// `delete` removes the student's enrollments together with the student in
/// one transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students ordered by identifier.
    async fn list_all(&self) -> Result<Vec<Student>, StudentRepositoryError>;

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Whether any student other than `excluding` holds `email`.
    async fn email_in_use(
        &self,
        email: &str,
        excluding: Option<StudentId>,
    ) -> Result<bool, StudentRepositoryError>;

    /// Insert a new student and return it with its assigned identifier.
    async fn insert(&self, student: &Student) -> Result<Student, StudentRepositoryError>;

    /// Overwrite an existing student. Returns `None` when the row is gone.
    async fn update(
        &self,
        id: StudentId,
        student: &Student,
    ) -> Result<Option<Student>, StudentRepositoryError>;

    /// Delete a student and its enrollments. Returns `false` when no row
    /// matched.
    async fn delete(&self, id: StudentId) -> Result<bool, StudentRepositoryError>;
}
