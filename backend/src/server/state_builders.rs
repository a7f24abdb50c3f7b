//! Wires the Diesel repositories into domain services and HTTP state.

use std::sync::Arc;

use actix_web::web;

use education_manager::domain::{CourseService, StudentService};
use education_manager::inbound::http::state::{HttpState, HttpStatePorts};
use education_manager::outbound::persistence::{
    DbPool, DieselCourseRepository, DieselEnrollmentRepository, DieselStudentRepository,
};

/// Build handler state backed by PostgreSQL.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let students_repo = Arc::new(DieselStudentRepository::new(pool.clone()));
    let courses_repo = Arc::new(DieselCourseRepository::new(pool.clone()));
    let enrollments_repo = Arc::new(DieselEnrollmentRepository::new(pool.clone()));

    let students = Arc::new(StudentService::new(
        students_repo,
        courses_repo.clone(),
        enrollments_repo,
    ));
    let courses = Arc::new(CourseService::new(courses_repo));

    web::Data::new(HttpState::new(HttpStatePorts {
        students: students.clone(),
        students_query: students,
        courses: courses.clone(),
        courses_query: courses,
    }))
}
