//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::{test as actix_test, web};
use serde_json::Value;

use crate::domain::ports::{MockStudentsCommand, MockStudentsQuery};
use crate::domain::{CourseService, StudentService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::test_support::InMemoryEducationStore;

/// State wired to real services over a fresh in-memory store.
pub fn app_state() -> web::Data<HttpState> {
    let store = Arc::new(InMemoryEducationStore::default());
    let students = Arc::new(StudentService::new(store.clone(), store.clone(), store.clone()));
    let courses = Arc::new(CourseService::new(store));
    web::Data::new(HttpState::new(HttpStatePorts {
        students: students.clone(),
        students_query: students,
        courses: courses.clone(),
        courses_query: courses,
    }))
}

/// State whose student ports are mocks; course ports use the in-memory store.
pub fn mocked_state(
    students: MockStudentsCommand,
    students_query: MockStudentsQuery,
) -> web::Data<HttpState> {
    let courses = Arc::new(CourseService::new(Arc::new(
        InMemoryEducationStore::default(),
    )));
    web::Data::new(HttpState::new(HttpStatePorts {
        students: Arc::new(students),
        students_query: Arc::new(students_query),
        courses: courses.clone(),
        courses_query: courses,
    }))
}

/// Read a response body as JSON.
pub async fn json_body<B: MessageBody>(response: ServiceResponse<B>) -> Value {
    let bytes = actix_test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
