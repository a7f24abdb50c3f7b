//! Driving port for reading courses.

use async_trait::async_trait;

use crate::domain::{CourseId, Error, dto::CourseDto};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursesQuery: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<CourseDto>, Error>;

    async fn get_course(&self, id: CourseId) -> Result<CourseDto, Error>;
}
