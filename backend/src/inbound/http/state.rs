//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and only see the
//! driving ports, so they stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{CoursesCommand, CoursesQuery, StudentsCommand, StudentsQuery};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub students: Arc<dyn StudentsCommand>,
    pub students_query: Arc<dyn StudentsQuery>,
    pub courses: Arc<dyn CoursesCommand>,
    pub courses_query: Arc<dyn CoursesQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub students: Arc<dyn StudentsCommand>,
    pub students_query: Arc<dyn StudentsQuery>,
    pub courses: Arc<dyn CoursesCommand>,
    pub courses_query: Arc<dyn CoursesQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use education_manager::domain::{CourseService, StudentService};
    /// use education_manager::inbound::http::state::{HttpState, HttpStatePorts};
    /// use education_manager::test_support::InMemoryEducationStore;
    ///
    /// let store = Arc::new(InMemoryEducationStore::default());
    /// let students = Arc::new(StudentService::new(store.clone(), store.clone(), store.clone()));
    /// let courses = Arc::new(CourseService::new(store));
    /// let state = HttpState::new(HttpStatePorts {
    ///     students: students.clone(),
    ///     students_query: students,
    ///     courses: courses.clone(),
    ///     courses_query: courses,
    /// });
    /// let _students = state.students_query.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            students,
            students_query,
            courses,
            courses_query,
        } = ports;
        Self {
            students,
            students_query,
            courses,
            courses_query,
        }
    }
}
