//! Driving port for student mutations, enrollment included.
//!
//! Inbound adapters hand over payloads exactly as received; an absent create
//! body is passed as `None` and rejected with `invalid_request`.

use async_trait::async_trait;

use crate::domain::dto::{CreateStudentDto, EnrollmentDto, StudentDto, UpdateStudentDto};
use crate::domain::{CourseId, Error, StudentId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentsCommand: Send + Sync {
    async fn create_student(&self, payload: Option<CreateStudentDto>) -> Result<StudentDto, Error>;

    /// Apply the supplied fields and re-validate the merged record.
    async fn update_student(
        &self,
        id: StudentId,
        payload: UpdateStudentDto,
    ) -> Result<StudentDto, Error>;

    async fn delete_student(&self, id: StudentId) -> Result<(), Error>;

    /// Enroll a student in a course. A repeated pair yields `conflict`.
    async fn enroll(&self, student_id: StudentId, course_id: CourseId)
    -> Result<EnrollmentDto, Error>;
}
