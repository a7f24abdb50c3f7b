//! Course HTTP handlers.
//!
//! ```text
//! POST   /api/v1/courses
//! GET    /api/v1/courses
//! GET    /api/v1/courses/{id}
//! PUT    /api/v1/courses/{id}
//! DELETE /api/v1/courses/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::dto::{CourseDto, CreateCourseDto, UpdateCourseDto};
use crate::domain::CourseId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    CourseSchema, CreateCourseSchema, ErrorSchema, UpdateCourseSchema,
};
use crate::inbound::http::state::HttpState;

/// Create a course.
#[utoipa::path(
    post,
    path = "/api/v1/courses",
    request_body = CreateCourseSchema,
    responses(
        (status = 201, description = "Course created", body = CourseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "createCourse"
)]
#[post("/courses")]
pub async fn create_course(
    state: web::Data<HttpState>,
    payload: web::Json<CreateCourseDto>,
) -> ApiResult<HttpResponse> {
    let created = state
        .courses
        .create_course(Some(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses",
    responses(
        (status = 200, description = "Courses", body = [CourseSchema]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CourseDto>>> {
    Ok(web::Json(state.courses_query.list_courses().await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    params(("id" = i64, Path, description = "Course identifier")),
    responses(
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 200, description = "Course", body = CourseSchema),
        (status = 404, description = "Course not found", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<CourseDto>> {
    let id = CourseId::new(path.into_inner());
    Ok(web::Json(state.courses_query.get_course(id).await?))
}

/// Apply a partial update to a course.
#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}",
    params(("id" = i64, Path, description = "Course identifier")),
    request_body = UpdateCourseSchema,
    responses(
        (status = 200, description = "Updated course", body = CourseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Course not found", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "updateCourse"
)]
#[put("/courses/{id}")]
pub async fn update_course(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateCourseDto>,
) -> ApiResult<web::Json<CourseDto>> {
    let id = CourseId::new(path.into_inner());
    Ok(web::Json(
        state.courses.update_course(id, payload.into_inner()).await?,
    ))
}

/// Delete a course and every enrollment referencing it.
#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    params(("id" = i64, Path, description = "Course identifier")),
    responses(
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "deleteCourse"
)]
#[delete("/courses/{id}")]
pub async fn delete_course(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .courses
        .delete_course(CourseId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
