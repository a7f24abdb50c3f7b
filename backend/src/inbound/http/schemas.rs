//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. The wrappers below mirror their
//! wire shape and register it under the domain type's path, keeping utoipa
//! in the inbound adapter.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa's derive"
)]

use utoipa::ToSchema;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    #[schema(rename = "not_found")]
    NotFound,
    #[schema(rename = "conflict")]
    Conflict,
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error response payload.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "First name is required")]
    message: String,
    #[schema(example = "6f1c2a9e-3b1d-4c55-9a7e-0d1f2e3c4b5a")]
    trace_id: Option<String>,
    /// Offending field and rule code for validation failures.
    details: Option<serde_json::Value>,
}

/// Student as returned by the API.
#[derive(ToSchema)]
#[schema(as = crate::domain::dto::StudentDto, rename_all = "camelCase")]
pub struct StudentSchema {
    #[schema(example = 1)]
    id: Option<i64>,
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
    #[schema(example = "ada@example.com")]
    email: String,
}

/// Student registration payload.
#[derive(ToSchema)]
#[schema(as = crate::domain::dto::CreateStudentDto, rename_all = "camelCase")]
pub struct CreateStudentSchema {
    /// 2 to 50 characters.
    #[schema(example = "Ada")]
    first_name: String,
    /// 2 to 50 characters.
    #[schema(example = "Lovelace")]
    last_name: String,
    /// Valid address of at most 100 characters, unique across students.
    #[schema(example = "ada@example.com")]
    email: String,
}

/// Partial student update. Omitted fields are left unchanged.
#[derive(ToSchema)]
#[schema(as = crate::domain::dto::UpdateStudentDto, rename_all = "camelCase")]
pub struct UpdateStudentSchema {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
}

/// Course as returned by the API.
#[derive(ToSchema)]
#[schema(as = crate::domain::dto::CourseDto)]
pub struct CourseSchema {
    #[schema(example = 1)]
    id: Option<i64>,
    #[schema(example = "Mathematics")]
    name: String,
    #[schema(example = "Study of numbers and patterns.")]
    description: String,
}

/// Course creation payload.
#[derive(ToSchema)]
#[schema(as = crate::domain::dto::CreateCourseDto)]
pub struct CreateCourseSchema {
    /// 1 to 50 characters.
    #[schema(example = "Mathematics")]
    name: String,
    /// 1 to 1000 characters.
    #[schema(example = "Study of numbers and patterns.")]
    description: String,
}

/// Partial course update.
#[derive(ToSchema)]
#[schema(as = crate::domain::dto::UpdateCourseDto)]
pub struct UpdateCourseSchema {
    name: Option<String>,
    description: Option<String>,
}

/// Enrollment with the student and course nested.
#[derive(ToSchema)]
#[schema(as = crate::domain::dto::EnrollmentDto)]
pub struct EnrollmentSchema {
    #[schema(example = 1)]
    id: i64,
    student: StudentSchema,
    course: CourseSchema,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn wrappers_register_domain_names() {
        assert!(StudentSchema::name().ends_with("StudentDto"));
        assert!(EnrollmentSchema::name().ends_with("EnrollmentDto"));
        assert!(ErrorSchema::name().ends_with("Error"));
    }

    #[test]
    fn student_schema_uses_camel_case_fields() {
        let json = schema_json::<StudentSchema>();
        assert!(json.contains("firstName"));
        assert!(json.contains("lastName"));
        assert!(!json.contains("first_name"));
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let json = schema_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "not_found",
            "conflict",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(json.contains(code), "missing {code}");
        }
    }
}
