//! PostgreSQL-backed [`StudentRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{Student, StudentId};

use super::diesel_error_mapping::{DbFailure, STUDENT_EMAIL_CONSTRAINT, classify, pool_message};
use super::models::{StudentFields, StudentRow};
use super::pool::{DbPool, PoolError};
use super::schema::{enrollments, students};

/// Diesel implementation of the student repository port.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> StudentRepositoryError {
    StudentRepositoryError::connection(pool_message(error))
}

fn map_failure(failure: DbFailure, email: Option<&str>) -> StudentRepositoryError {
    match (failure, email) {
        (failure, Some(email)) if failure.violates_unique(STUDENT_EMAIL_CONSTRAINT) => {
            StudentRepositoryError::duplicate_email(email)
        }
        (DbFailure::Connection(message), _) => StudentRepositoryError::connection(message),
        (DbFailure::UniqueViolation { .. }, _) => {
            StudentRepositoryError::query("unique constraint violated")
        }
        (DbFailure::ForeignKeyViolation { .. }, _) => {
            StudentRepositoryError::query("foreign key violated")
        }
        (DbFailure::Query(message), _) => StudentRepositoryError::query(message),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> StudentRepositoryError {
    map_failure(classify(error), None)
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn list_all(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<StudentRow> = students::table
            .order(students::id.asc())
            .select(StudentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<StudentRow> = students::table
            .find(id.get())
            .select(StudentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Student::from))
    }

    async fn email_in_use(
        &self,
        email: &str,
        excluding: Option<StudentId>,
    ) -> Result<bool, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let matches = students::table.filter(students::email.eq(email));
        let count: i64 = match excluding {
            Some(id) => {
                matches
                    .filter(students::id.ne(id.get()))
                    .count()
                    .get_result(&mut conn)
                    .await
            }
            None => matches.count().get_result(&mut conn).await,
        }
        .map_err(map_diesel_error)?;
        Ok(count > 0)
    }

    async fn insert(&self, student: &Student) -> Result<Student, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: StudentRow = diesel::insert_into(students::table)
            .values(StudentFields::from(student))
            .returning(StudentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_failure(classify(err), Some(&student.email)))?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: StudentId,
        student: &Student,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<StudentRow> = diesel::update(students::table.find(id.get()))
            .set(&StudentFields::from(student))
            .returning(StudentRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_failure(classify(err), Some(&student.email)))?;
        Ok(row.map(Student::from))
    }

    async fn delete(&self, id: StudentId) -> Result<bool, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let raw_id = id.get();
        let deleted = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    diesel::delete(enrollments::table.filter(enrollments::student_id.eq(raw_id)))
                        .execute(conn)
                        .await?;
                    diesel::delete(students::table.find(raw_id))
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
