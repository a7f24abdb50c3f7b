//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every student, course and health endpoint together
//! with the schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI
//! serves it in debug builds and `cargo run --bin openapi-dump` prints it.

use crate::inbound::http::schemas::{
    CourseSchema, CreateCourseSchema, CreateStudentSchema, EnrollmentSchema, ErrorCodeSchema,
    ErrorSchema, StudentSchema, UpdateCourseSchema, UpdateStudentSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Education manager API",
        description = "Manage students, courses and enrollments."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::students::enroll,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::update_course,
        crate::inbound::http::courses::delete_course,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        StudentSchema,
        CreateStudentSchema,
        UpdateStudentSchema,
        CourseSchema,
        CreateCourseSchema,
        UpdateCourseSchema,
        EnrollmentSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "students", description = "Student registration and enrollment"),
        (name = "courses", description = "Course catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_named<'a>(doc: &'a utoipa::openapi::OpenApi, suffix: &str) -> &'a RefOr<Schema> {
        let schemas = &doc.components.as_ref().expect("components").schemas;
        schemas
            .iter()
            .find(|(name, _)| name.ends_with(suffix))
            .map(|(_, schema)| schema)
            .unwrap_or_else(|| panic!("schema ending with {suffix}"))
    }

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn every_resource_path_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/students",
            "/api/v1/students/{id}",
            "/api/v1/students/{studentId}/courses/{courseId}",
            "/api/v1/courses",
            "/api/v1/courses/{id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn student_schema_has_camel_case_fields() {
        let doc = ApiDoc::openapi();
        let student = schema_named(&doc, ".StudentDto");
        for field in ["id", "firstName", "lastName", "email"] {
            assert_object_schema_has_field(student, field);
        }
    }

    #[test]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let error = schema_named(&doc, "domain.Error");
        assert_object_schema_has_field(error, "code");
        assert_object_schema_has_field(error, "message");
        assert_object_schema_has_field(error, "traceId");
    }
}
