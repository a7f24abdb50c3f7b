//! Classifies Diesel and pool failures for the repository adapters.
//!
//! Each adapter turns a [`DbFailure`] into its own port error, so constraint
//! names only need to be inspected here.

use tracing::debug;

use super::pool::PoolError;

/// Unique constraint on `students.email`.
pub(crate) const STUDENT_EMAIL_CONSTRAINT: &str = "students_email_key";
/// Unique constraint on `enrollments (student_id, course_id)`.
pub(crate) const ENROLLMENT_PAIR_CONSTRAINT: &str = "enrollments_student_course_key";
/// Foreign key from `enrollments.student_id`.
pub(crate) const ENROLLMENT_STUDENT_FK: &str = "enrollments_student_id_fkey";
/// Foreign key from `enrollments.course_id`.
pub(crate) const ENROLLMENT_COURSE_FK: &str = "enrollments_course_id_fkey";

/// Storage failure reduced to what the adapters care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DbFailure {
    Connection(String),
    UniqueViolation { constraint: Option<String> },
    ForeignKeyViolation { constraint: Option<String> },
    Query(String),
}

impl DbFailure {
    /// Whether this is a unique violation on `constraint`.
    pub(crate) fn violates_unique(&self, constraint: &str) -> bool {
        matches!(self, Self::UniqueViolation { constraint: Some(name) } if name == constraint)
    }
}

/// Message carried by a pool error.
pub(crate) fn pool_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Classify a Diesel error, logging the raw details at `debug`.
pub(crate) fn classify(error: diesel::result::Error) -> DbFailure {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => DbFailure::Query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => DbFailure::Query("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DbFailure::Connection("database connection error".to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DbFailure::UniqueViolation {
                constraint: info.constraint_name().map(str::to_owned),
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            DbFailure::ForeignKeyViolation {
                constraint: info.constraint_name().map(str::to_owned),
            }
        }
        DieselError::DatabaseError(_, info) => DbFailure::Query(info.message().to_owned()),
        other => DbFailure::Query(other.to_string()),
    }
}
