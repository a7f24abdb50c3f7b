//! Course use-cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::converters::{apply_course_update, course_from_create};
use crate::domain::dto::{CourseDto, CreateCourseDto, UpdateCourseDto};
use crate::domain::ports::{CourseRepository, CoursesCommand, CoursesQuery};
use crate::domain::student_service::{course_not_found, map_course_error};
use crate::domain::validation::validate_course;
use crate::domain::{Course, CourseId, Error};

/// Course service implementing [`CoursesQuery`] and [`CoursesCommand`].
#[derive(Clone)]
pub struct CourseService<C> {
    courses: Arc<C>,
}

impl<C> CourseService<C> {
    pub fn new(courses: Arc<C>) -> Self {
        Self { courses }
    }
}

impl<C: CourseRepository> CourseService<C> {
    async fn load(&self, id: CourseId) -> Result<Course, Error> {
        self.courses
            .find_by_id(id)
            .await
            .map_err(map_course_error)?
            .ok_or_else(|| course_not_found(id))
    }
}

#[async_trait]
impl<C: CourseRepository> CoursesQuery for CourseService<C> {
    async fn list_courses(&self) -> Result<Vec<CourseDto>, Error> {
        let courses = self.courses.list_all().await.map_err(map_course_error)?;
        Ok(courses.iter().map(CourseDto::from).collect())
    }

    async fn get_course(&self, id: CourseId) -> Result<CourseDto, Error> {
        Ok(CourseDto::from(&self.load(id).await?))
    }
}

#[async_trait]
impl<C: CourseRepository> CoursesCommand for CourseService<C> {
    async fn create_course(&self, payload: Option<CreateCourseDto>) -> Result<CourseDto, Error> {
        let course = course_from_create(payload.as_ref())?;
        validate_course(&course)?;
        let saved = self.courses.insert(&course).await.map_err(map_course_error)?;
        info!(course_id = ?saved.id, "course created");
        Ok(CourseDto::from(&saved))
    }

    async fn update_course(
        &self,
        id: CourseId,
        payload: UpdateCourseDto,
    ) -> Result<CourseDto, Error> {
        let mut course = self.load(id).await?;
        apply_course_update(&mut course, payload);
        validate_course(&course)?;
        let saved = self
            .courses
            .update(id, &course)
            .await
            .map_err(map_course_error)?
            .ok_or_else(|| course_not_found(id))?;
        info!(course_id = %id, "course updated");
        Ok(CourseDto::from(&saved))
    }

    async fn delete_course(&self, id: CourseId) -> Result<(), Error> {
        self.load(id).await?;
        if !self.courses.delete(id).await.map_err(map_course_error)? {
            return Err(course_not_found(id));
        }
        info!(course_id = %id, "course deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{CourseRepositoryError, MockCourseRepository};
    use crate::test_support::InMemoryEducationStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn service() -> CourseService<InMemoryEducationStore> {
        CourseService::new(Arc::new(InMemoryEducationStore::default()))
    }

    fn maths() -> CreateCourseDto {
        CreateCourseDto {
            name: Some("Mathematics".into()),
            description: Some("Study of numbers and patterns.".into()),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_identifier_and_keeps_fields(service: CourseService<InMemoryEducationStore>) {
        let created = service.create_course(Some(maths())).await.expect("create");
        assert!(created.id.is_some());
        assert_eq!(created.name, "Mathematics");
        assert_eq!(created.description, "Study of numbers and patterns.");
    }

    #[rstest]
    #[tokio::test]
    async fn list_returns_courses_in_creation_order(service: CourseService<InMemoryEducationStore>) {
        service.create_course(Some(maths())).await.expect("maths");
        let science = CreateCourseDto {
            name: Some("Science".into()),
            description: Some("Experiments.".into()),
        };
        service.create_course(Some(science)).await.expect("science");

        let names: Vec<_> = service
            .list_courses()
            .await
            .expect("list")
            .into_iter()
            .map(|course| course.name)
            .collect();
        assert_eq!(names, ["Mathematics", "Science"]);
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_absent_payload(service: CourseService<InMemoryEducationStore>) {
        let error = service.create_course(None).await.expect_err("absent payload");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn update_merges_and_revalidates(service: CourseService<InMemoryEducationStore>) {
        let created = service.create_course(Some(maths())).await.expect("create");
        let id = CourseId::new(created.id.expect("id"));

        let updated = service
            .update_course(
                id,
                UpdateCourseDto {
                    name: Some("Algebra".into()),
                    description: None,
                },
            )
            .await
            .expect("update");
        assert_eq!(updated.name, "Algebra");
        assert_eq!(updated.description, "Study of numbers and patterns.");

        let error = service
            .update_course(
                id,
                UpdateCourseDto {
                    name: Some("  ".into()),
                    description: None,
                },
            )
            .await
            .expect_err("blank name");
        assert_eq!(error.message(), "Name is required");
    }

    #[rstest]
    #[tokio::test]
    async fn missing_course_is_not_found(service: CourseService<InMemoryEducationStore>) {
        let error = service.get_course(CourseId::new(404)).await.expect_err("missing");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "Course not found with id: 404");

        let error = service.delete_course(CourseId::new(404)).await.expect_err("missing");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn connection_failures_surface_as_service_unavailable() {
        let mut repo = MockCourseRepository::new();
        repo.expect_list_all()
            .times(1)
            .return_once(|| Err(CourseRepositoryError::connection("pool exhausted")));
        let service = CourseService::new(Arc::new(repo));

        let error = service.list_courses().await.expect_err("unavailable");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }

    #[tokio::test]
    async fn invalid_payload_never_reaches_storage() {
        let mut repo = MockCourseRepository::new();
        repo.expect_insert().never();
        let service = CourseService::new(Arc::new(repo));

        let error = service
            .create_course(Some(CreateCourseDto::default()))
            .await
            .expect_err("invalid");
        assert_eq!(error.message(), "Name is required");
    }
}
