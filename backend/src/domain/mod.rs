//! Domain entities, transport shapes, rules and use-case services.
//!
//! Nothing in this module depends on actix or Diesel. Inbound adapters talk
//! to the driving ports in [`ports`]; outbound adapters implement the driven
//! ones.

pub mod converters;
pub mod course;
pub mod course_service;
pub mod dto;
pub mod enrollment;
pub mod error;
pub mod ports;
pub mod student;
pub mod student_service;
pub mod trace_id;
pub mod validation;

pub use self::course::{Course, CourseId};
pub use self::course_service::CourseService;
pub use self::enrollment::{Enrollment, EnrollmentId};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::student::{Student, StudentId};
pub use self::student_service::StudentService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use education_manager::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("Student not found with id: 1"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
