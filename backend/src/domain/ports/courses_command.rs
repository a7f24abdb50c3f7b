//! Driving port for course mutations.

use async_trait::async_trait;

use crate::domain::dto::{CourseDto, CreateCourseDto, UpdateCourseDto};
use crate::domain::{CourseId, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursesCommand: Send + Sync {
    async fn create_course(&self, payload: Option<CreateCourseDto>) -> Result<CourseDto, Error>;

    async fn update_course(&self, id: CourseId, payload: UpdateCourseDto)
    -> Result<CourseDto, Error>;

    async fn delete_course(&self, id: CourseId) -> Result<(), Error>;
}
