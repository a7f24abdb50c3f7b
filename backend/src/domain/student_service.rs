//! Student use-cases, enrollment included.
//!
//! Mutations validate before touching storage. Email uniqueness is checked
//! after the static field rules pass; the storage unique constraint still
//! backs it up and is mapped to the same error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::converters::{apply_student_update, student_from_create};
use crate::domain::dto::{CreateStudentDto, EnrollmentDto, StudentDto, UpdateStudentDto};
use crate::domain::ports::{
    CourseRepository, CourseRepositoryError, EnrollmentRepository, EnrollmentRepositoryError,
    StudentRepository, StudentRepositoryError, StudentsCommand, StudentsQuery,
};
use crate::domain::validation::{duplicate_email, validate_student};
use crate::domain::{Course, CourseId, Enrollment, Error, Student, StudentId};

/// Message returned when a student enrolls in a course twice.
pub const ALREADY_ENROLLED_MESSAGE: &str = "Student is already enrolled in this course";

pub(crate) fn student_not_found(id: StudentId) -> Error {
    Error::not_found(format!("Student not found with id: {id}"))
}

pub(crate) fn course_not_found(id: CourseId) -> Error {
    Error::not_found(format!("Course not found with id: {id}"))
}

pub(crate) fn map_course_error(error: CourseRepositoryError) -> Error {
    match error {
        CourseRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("course repository unavailable: {message}"))
        }
        CourseRepositoryError::Query { message } => {
            Error::internal(format!("course repository error: {message}"))
        }
    }
}

/// Student service implementing [`StudentsQuery`] and [`StudentsCommand`].
#[derive(Clone)]
pub struct StudentService<S, C, E> {
    students: Arc<S>,
    courses: Arc<C>,
    enrollments: Arc<E>,
}

impl<S, C, E> StudentService<S, C, E> {
    pub fn new(students: Arc<S>, courses: Arc<C>, enrollments: Arc<E>) -> Self {
        Self {
            students,
            courses,
            enrollments,
        }
    }
}

impl<S, C, E> StudentService<S, C, E>
where
    S: StudentRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    fn map_student_error(error: StudentRepositoryError) -> Error {
        match error {
            StudentRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("student repository unavailable: {message}"))
            }
            StudentRepositoryError::Query { message } => {
                Error::internal(format!("student repository error: {message}"))
            }
            StudentRepositoryError::DuplicateEmail { email } => duplicate_email(&email),
        }
    }

    fn map_enrollment_error(error: EnrollmentRepositoryError) -> Error {
        match error {
            EnrollmentRepositoryError::StudentMissing { student_id } => {
                student_not_found(StudentId::new(student_id))
            }
            EnrollmentRepositoryError::CourseMissing { course_id } => {
                course_not_found(CourseId::new(course_id))
            }
            EnrollmentRepositoryError::Duplicate => Error::conflict(ALREADY_ENROLLED_MESSAGE),
            EnrollmentRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("enrollment repository unavailable: {message}"))
            }
            EnrollmentRepositoryError::Query { message } => {
                Error::internal(format!("enrollment repository error: {message}"))
            }
        }
    }

    async fn load_student(&self, id: StudentId) -> Result<Student, Error> {
        self.students
            .find_by_id(id)
            .await
            .map_err(Self::map_student_error)?
            .ok_or_else(|| student_not_found(id))
    }

    async fn load_course(&self, id: CourseId) -> Result<Course, Error> {
        self.courses
            .find_by_id(id)
            .await
            .map_err(map_course_error)?
            .ok_or_else(|| course_not_found(id))
    }

    async fn ensure_email_available(
        &self,
        email: &str,
        excluding: Option<StudentId>,
    ) -> Result<(), Error> {
        let taken = self
            .students
            .email_in_use(email, excluding)
            .await
            .map_err(Self::map_student_error)?;
        if taken {
            debug!(email, "rejected student with duplicate email");
            return Err(duplicate_email(email));
        }
        Ok(())
    }
}

#[async_trait]
impl<S, C, E> StudentsQuery for StudentService<S, C, E>
where
    S: StudentRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    async fn list_students(&self) -> Result<Vec<StudentDto>, Error> {
        let students = self
            .students
            .list_all()
            .await
            .map_err(Self::map_student_error)?;
        Ok(students.iter().map(StudentDto::from).collect())
    }

    async fn get_student(&self, id: StudentId) -> Result<StudentDto, Error> {
        let student = self.load_student(id).await?;
        Ok(StudentDto::from(&student))
    }
}

#[async_trait]
impl<S, C, E> StudentsCommand for StudentService<S, C, E>
where
    S: StudentRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    async fn create_student(&self, payload: Option<CreateStudentDto>) -> Result<StudentDto, Error> {
        let student = student_from_create(payload.as_ref())?;
        validate_student(&student)?;
        self.ensure_email_available(&student.email, None).await?;

        let saved = self
            .students
            .insert(&student)
            .await
            .map_err(Self::map_student_error)?;
        info!(student_id = ?saved.id, "student created");
        Ok(StudentDto::from(&saved))
    }

    async fn update_student(
        &self,
        id: StudentId,
        payload: UpdateStudentDto,
    ) -> Result<StudentDto, Error> {
        let mut student = self.load_student(id).await?;
        apply_student_update(&mut student, payload);
        validate_student(&student)?;
        self.ensure_email_available(&student.email, Some(id)).await?;

        let saved = self
            .students
            .update(id, &student)
            .await
            .map_err(Self::map_student_error)?
            .ok_or_else(|| student_not_found(id))?;
        info!(student_id = %id, "student updated");
        Ok(StudentDto::from(&saved))
    }

    async fn delete_student(&self, id: StudentId) -> Result<(), Error> {
        self.load_student(id).await?;
        let deleted = self
            .students
            .delete(id)
            .await
            .map_err(Self::map_student_error)?;
        if !deleted {
            return Err(student_not_found(id));
        }
        info!(student_id = %id, "student deleted");
        Ok(())
    }

    async fn enroll(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<EnrollmentDto, Error> {
        let student = self.load_student(student_id).await?;
        let course = self.load_course(course_id).await?;

        let enrolled = self
            .enrollments
            .course_ids_for_student(student_id)
            .await
            .map_err(Self::map_enrollment_error)?;
        if enrolled.contains(&course_id) {
            warn!(student_id = %student_id, course_id = %course_id, "duplicate enrollment rejected");
            return Err(Error::conflict(ALREADY_ENROLLED_MESSAGE));
        }

        let id = self
            .enrollments
            .insert(student_id, course_id)
            .await
            .map_err(Self::map_enrollment_error)?;
        info!(
            enrollment_id = %id,
            student_id = %student_id,
            course_id = %course_id,
            "student enrolled"
        );
        Ok(EnrollmentDto::from(&Enrollment {
            id,
            student,
            course,
        }))
    }
}

#[cfg(test)]
#[path = "student_service_tests.rs"]
mod tests;
