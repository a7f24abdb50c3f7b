//! PostgreSQL persistence adapters built on Diesel.
//!
//! Repositories use `diesel-async` connections from a `bb8` pool. Row
//! structs and table definitions stay private to this module; callers only
//! see domain entities and port errors.
//!
//! ```ignore
//! use education_manager::outbound::persistence::{DbPool, DieselStudentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/education")).await?;
//! let students = DieselStudentRepository::new(pool);
//! ```

mod diesel_course_repository;
mod diesel_enrollment_repository;
mod diesel_error_mapping;
mod diesel_student_repository;
pub mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_course_repository::DieselCourseRepository;
pub use diesel_enrollment_repository::DieselEnrollmentRepository;
pub use diesel_student_repository::DieselStudentRepository;
pub use migrations::{MigrationError, run_pending_migrations, run_pending_migrations_async};
pub use pool::{DbPool, PoolConfig, PoolError};
