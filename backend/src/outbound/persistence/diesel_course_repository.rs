//! PostgreSQL-backed [`CourseRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseId};

use super::diesel_error_mapping::{DbFailure, classify, pool_message};
use super::models::{CourseFields, CourseRow};
use super::pool::{DbPool, PoolError};
use super::schema::{courses, enrollments};

#[derive(Clone)]
pub struct DieselCourseRepository {
    pool: DbPool,
}

impl DieselCourseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CourseRepositoryError {
    CourseRepositoryError::connection(pool_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> CourseRepositoryError {
    match classify(error) {
        DbFailure::Connection(message) => CourseRepositoryError::connection(message),
        DbFailure::UniqueViolation { .. } => CourseRepositoryError::query("unique constraint violated"),
        DbFailure::ForeignKeyViolation { .. } => CourseRepositoryError::query("foreign key violated"),
        DbFailure::Query(message) => CourseRepositoryError::query(message),
    }
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn list_all(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CourseRow> = courses::table
            .order(courses::id.asc())
            .select(CourseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CourseRow> = courses::table
            .find(id.get())
            .select(CourseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Course::from))
    }

    async fn insert(&self, course: &Course) -> Result<Course, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: CourseRow = diesel::insert_into(courses::table)
            .values(CourseFields::from(course))
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: CourseId,
        course: &Course,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CourseRow> = diesel::update(courses::table.find(id.get()))
            .set(&CourseFields::from(course))
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Course::from))
    }

    async fn delete(&self, id: CourseId) -> Result<bool, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let raw_id = id.get();
        let deleted = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    diesel::delete(enrollments::table.filter(enrollments::course_id.eq(raw_id)))
                        .execute(conn)
                        .await?;
                    diesel::delete(courses::table.find(raw_id)).execute(conn).await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
