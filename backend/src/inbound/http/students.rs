//! Student HTTP handlers, enrollment included.
//!
//! ```text
//! POST   /api/v1/students
//! GET    /api/v1/students
//! GET    /api/v1/students/{id}
//! PUT    /api/v1/students/{id}
//! DELETE /api/v1/students/{id}
//! POST   /api/v1/students/{studentId}/courses/{courseId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::dto::{CreateStudentDto, EnrollmentDto, StudentDto, UpdateStudentDto};
use crate::domain::{CourseId, StudentId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    CreateStudentSchema, EnrollmentSchema, ErrorSchema, StudentSchema, UpdateStudentSchema,
};
use crate::inbound::http::state::HttpState;

/// Register a student.
#[utoipa::path(
    post,
    path = "/api/v1/students",
    request_body = CreateStudentSchema,
    responses(
        (status = 201, description = "Student created", body = StudentSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "createStudent"
)]
#[post("/students")]
pub async fn create_student(
    state: web::Data<HttpState>,
    payload: web::Json<CreateStudentDto>,
) -> ApiResult<HttpResponse> {
    let created = state
        .students
        .create_student(Some(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(created))
}

/// List every student.
#[utoipa::path(
    get,
    path = "/api/v1/students",
    responses(
        (status = 200, description = "Students", body = [StudentSchema]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "listStudents"
)]
#[get("/students")]
pub async fn list_students(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<StudentDto>>> {
    Ok(web::Json(state.students_query.list_students().await?))
}

/// Fetch one student.
#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 200, description = "Student", body = StudentSchema),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "getStudent"
)]
#[get("/students/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<StudentDto>> {
    let id = StudentId::new(path.into_inner());
    Ok(web::Json(state.students_query.get_student(id).await?))
}

/// Apply a partial update to a student.
#[utoipa::path(
    put,
    path = "/api/v1/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    request_body = UpdateStudentSchema,
    responses(
        (status = 200, description = "Updated student", body = StudentSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "updateStudent"
)]
#[put("/students/{id}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateStudentDto>,
) -> ApiResult<web::Json<StudentDto>> {
    let id = StudentId::new(path.into_inner());
    let updated = state
        .students
        .update_student(id, payload.into_inner())
        .await?;
    Ok(web::Json(updated))
}

/// Delete a student and their enrollments.
#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "deleteStudent"
)]
#[delete("/students/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .students
        .delete_student(StudentId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Enroll a student in a course.
#[utoipa::path(
    post,
    path = "/api/v1/students/{studentId}/courses/{courseId}",
    params(
        ("studentId" = i64, Path, description = "Student identifier"),
        ("courseId" = i64, Path, description = "Course identifier")
    ),
    responses(
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 200, description = "Enrollment created", body = EnrollmentSchema),
        (status = 404, description = "Student or course not found", body = ErrorSchema),
        (status = 409, description = "Already enrolled", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "enrollStudent"
)]
#[post("/students/{student_id}/courses/{course_id}")]
pub async fn enroll(
    state: web::Data<HttpState>,
    path: web::Path<(i64, i64)>,
) -> ApiResult<web::Json<EnrollmentDto>> {
    let (student_id, course_id) = path.into_inner();
    let enrollment = state
        .students
        .enroll(StudentId::new(student_id), CourseId::new(course_id))
        .await?;
    Ok(web::Json(enrollment))
}
