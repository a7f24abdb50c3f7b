//! PostgreSQL-backed [`EnrollmentRepository`].
//!
//! Inserts run in one transaction that takes `FOR SHARE` locks on the
//! referenced student and course rows. A concurrent delete of either parent
//! therefore waits for the insert to finish, and the pair's unique
//! constraint rejects a concurrent duplicate.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{EnrollmentRepository, EnrollmentRepositoryError};
use crate::domain::{CourseId, EnrollmentId, StudentId};

use super::diesel_error_mapping::{
    DbFailure, ENROLLMENT_COURSE_FK, ENROLLMENT_PAIR_CONSTRAINT, ENROLLMENT_STUDENT_FK, classify,
    pool_message,
};
use super::models::NewEnrollmentRow;
use super::pool::{DbPool, PoolError};
use super::schema::{courses, enrollments, students};

#[derive(Clone)]
pub struct DieselEnrollmentRepository {
    pool: DbPool,
}

impl DieselEnrollmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Result of the insert transaction.
enum InsertOutcome {
    Inserted(i64),
    StudentMissing,
    CourseMissing,
}

fn map_pool_error(error: PoolError) -> EnrollmentRepositoryError {
    EnrollmentRepositoryError::connection(pool_message(error))
}

fn map_failure(
    failure: DbFailure,
    student_id: i64,
    course_id: i64,
) -> EnrollmentRepositoryError {
    match failure {
        DbFailure::Connection(message) => EnrollmentRepositoryError::connection(message),
        DbFailure::UniqueViolation { constraint } => match constraint.as_deref() {
            Some(ENROLLMENT_PAIR_CONSTRAINT) | None => EnrollmentRepositoryError::duplicate(),
            Some(other) => {
                EnrollmentRepositoryError::query(format!("unexpected unique violation: {other}"))
            }
        },
        DbFailure::ForeignKeyViolation { constraint } => match constraint.as_deref() {
            Some(ENROLLMENT_STUDENT_FK) => EnrollmentRepositoryError::student_missing(student_id),
            Some(ENROLLMENT_COURSE_FK) => EnrollmentRepositoryError::course_missing(course_id),
            _ => EnrollmentRepositoryError::query("foreign key violated"),
        },
        DbFailure::Query(message) => EnrollmentRepositoryError::query(message),
    }
}

fn map_read_error(error: diesel::result::Error) -> EnrollmentRepositoryError {
    match classify(error) {
        DbFailure::Connection(message) => EnrollmentRepositoryError::connection(message),
        DbFailure::Query(message) => EnrollmentRepositoryError::query(message),
        DbFailure::UniqueViolation { .. } | DbFailure::ForeignKeyViolation { .. } => {
            EnrollmentRepositoryError::query("constraint violated during read")
        }
    }
}

#[async_trait]
impl EnrollmentRepository for DieselEnrollmentRepository {
    async fn course_ids_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<CourseId>, EnrollmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let ids: Vec<i64> = enrollments::table
            .filter(enrollments::student_id.eq(student_id.get()))
            .order(enrollments::course_id.asc())
            .select(enrollments::course_id)
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;
        Ok(ids.into_iter().map(CourseId::new).collect())
    }

    async fn insert(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<EnrollmentId, EnrollmentRepositoryError> {
        let (raw_student, raw_course) = (student_id.get(), course_id.get());
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let outcome = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    let student: Option<i64> = students::table
                        .find(raw_student)
                        .select(students::id)
                        .for_share()
                        .first(conn)
                        .await
                        .optional()?;
                    if student.is_none() {
                        return Ok(InsertOutcome::StudentMissing);
                    }

                    let course: Option<i64> = courses::table
                        .find(raw_course)
                        .select(courses::id)
                        .for_share()
                        .first(conn)
                        .await
                        .optional()?;
                    if course.is_none() {
                        return Ok(InsertOutcome::CourseMissing);
                    }

                    let id: i64 = diesel::insert_into(enrollments::table)
                        .values(NewEnrollmentRow {
                            student_id: raw_student,
                            course_id: raw_course,
                        })
                        .returning(enrollments::id)
                        .get_result(conn)
                        .await?;
                    Ok(InsertOutcome::Inserted(id))
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_failure(classify(err), raw_student, raw_course))?;

        match outcome {
            InsertOutcome::Inserted(id) => Ok(EnrollmentId::new(id)),
            InsertOutcome::StudentMissing => {
                debug!(student_id = raw_student, "enrollment target student vanished");
                Err(EnrollmentRepositoryError::student_missing(raw_student))
            }
            InsertOutcome::CourseMissing => {
                debug!(course_id = raw_course, "enrollment target course vanished");
                Err(EnrollmentRepositoryError::course_missing(raw_course))
            }
        }
    }
}
