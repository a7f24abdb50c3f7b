//! Driven port for enrollment storage.
//!
//! Enrollment inserts must be atomic with respect to the referenced rows:
//! adapters lock the student and course for the duration of the insert and
//! rely on the `(student_id, course_id)` uniqueness constraint so two
//! concurrent inserts for the same pair cannot both succeed.

use async_trait::async_trait;

use crate::domain::{CourseId, EnrollmentId, StudentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by enrollment repository adapters.
    pub enum EnrollmentRepositoryError {
        /// The referenced student no longer exists.
        StudentMissing { student_id: i64 } => "student {student_id} does not exist",
        /// The referenced course no longer exists.
        CourseMissing { course_id: i64 } => "course {course_id} does not exist",
        /// The pair is already enrolled.
        Duplicate => "student is already enrolled in the course",
        /// Repository connection could not be established.
        Connection { message: String } => "enrollment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "enrollment repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Courses the student is enrolled in, by course identifier.
    async fn course_ids_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<CourseId>, EnrollmentRepositoryError>;

    /// Record an enrollment inside a single transaction.
    async fn insert(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<EnrollmentId, EnrollmentRepositoryError>;
}
