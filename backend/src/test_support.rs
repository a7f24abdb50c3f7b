//! Test utilities shared by unit tests and the `tests/` suites.
//!
//! Compiled for `cfg(test)` and when the `test-support` feature is enabled.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    CourseRepository, CourseRepositoryError, EnrollmentRepository, EnrollmentRepositoryError,
    StudentRepository, StudentRepositoryError,
};
use crate::domain::{Course, CourseId, EnrollmentId, Student, StudentId};

#[derive(Debug, Default)]
struct State {
    next_student: i64,
    next_course: i64,
    next_enrollment: i64,
    students: BTreeMap<StudentId, Student>,
    courses: BTreeMap<CourseId, Course>,
    enrollments: BTreeMap<EnrollmentId, (StudentId, CourseId)>,
}

impl State {
    fn drop_enrollments_where(&mut self, predicate: impl Fn(StudentId, CourseId) -> bool) {
        self.enrollments
            .retain(|_, (student, course)| !predicate(*student, *course));
    }
}

/// In-memory stand-in for the PostgreSQL adapters.
///
/// Implements all three repository ports against one shared state, with the
/// same identifier ordering, email uniqueness, pair uniqueness and cascade
/// behaviour as the database schema.
#[derive(Debug, Default)]
pub struct InMemoryEducationStore {
    state: Mutex<State>,
}

impl InMemoryEducationStore {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored students.
    pub fn student_count(&self) -> usize {
        self.state().students.len()
    }

    /// Number of stored enrollments.
    pub fn enrollment_count(&self) -> usize {
        self.state().enrollments.len()
    }

    /// Number of enrollments for one (student, course) pair.
    pub fn enrollment_count_for(&self, student_id: StudentId, course_id: CourseId) -> usize {
        self.state()
            .enrollments
            .values()
            .filter(|pair| **pair == (student_id, course_id))
            .count()
    }
}

#[async_trait]
impl StudentRepository for InMemoryEducationStore {
    async fn list_all(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        Ok(self.state().students.values().cloned().collect())
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self.state().students.get(&id).cloned())
    }

    async fn email_in_use(
        &self,
        email: &str,
        excluding: Option<StudentId>,
    ) -> Result<bool, StudentRepositoryError> {
        Ok(self
            .state()
            .students
            .iter()
            .any(|(id, student)| student.email == email && Some(*id) != excluding))
    }

    async fn insert(&self, student: &Student) -> Result<Student, StudentRepositoryError> {
        let mut state = self.state();
        if state.students.values().any(|s| s.email == student.email) {
            return Err(StudentRepositoryError::duplicate_email(student.email.clone()));
        }
        state.next_student += 1;
        let id = StudentId::new(state.next_student);
        let saved = student.clone().with_id(id);
        state.students.insert(id, saved.clone());
        Ok(saved)
    }

    async fn update(
        &self,
        id: StudentId,
        student: &Student,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        let mut state = self.state();
        if !state.students.contains_key(&id) {
            return Ok(None);
        }
        let clash = state
            .students
            .iter()
            .any(|(other, s)| *other != id && s.email == student.email);
        if clash {
            return Err(StudentRepositoryError::duplicate_email(student.email.clone()));
        }
        let saved = student.clone().with_id(id);
        state.students.insert(id, saved.clone());
        Ok(Some(saved))
    }

    async fn delete(&self, id: StudentId) -> Result<bool, StudentRepositoryError> {
        let mut state = self.state();
        state.drop_enrollments_where(|student, _| student == id);
        Ok(state.students.remove(&id).is_some())
    }
}

#[async_trait]
impl CourseRepository for InMemoryEducationStore {
    async fn list_all(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(self.state().courses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self.state().courses.get(&id).cloned())
    }

    async fn insert(&self, course: &Course) -> Result<Course, CourseRepositoryError> {
        let mut state = self.state();
        state.next_course += 1;
        let id = CourseId::new(state.next_course);
        let saved = course.clone().with_id(id);
        state.courses.insert(id, saved.clone());
        Ok(saved)
    }

    async fn update(
        &self,
        id: CourseId,
        course: &Course,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        let mut state = self.state();
        let Some(slot) = state.courses.get_mut(&id) else {
            return Ok(None);
        };
        *slot = course.clone().with_id(id);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: CourseId) -> Result<bool, CourseRepositoryError> {
        let mut state = self.state();
        state.drop_enrollments_where(|_, course| course == id);
        Ok(state.courses.remove(&id).is_some())
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEducationStore {
    async fn course_ids_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<CourseId>, EnrollmentRepositoryError> {
        Ok(self
            .state()
            .enrollments
            .values()
            .filter(|(student, _)| *student == student_id)
            .map(|(_, course)| *course)
            .collect())
    }

    async fn insert(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<EnrollmentId, EnrollmentRepositoryError> {
        let mut state = self.state();
        if !state.students.contains_key(&student_id) {
            return Err(EnrollmentRepositoryError::student_missing(student_id.get()));
        }
        if !state.courses.contains_key(&course_id) {
            return Err(EnrollmentRepositoryError::course_missing(course_id.get()));
        }
        if state
            .enrollments
            .values()
            .any(|pair| *pair == (student_id, course_id))
        {
            return Err(EnrollmentRepositoryError::duplicate());
        }
        state.next_enrollment += 1;
        let id = EnrollmentId::new(state.next_enrollment);
        state.enrollments.insert(id, (student_id, course_id));
        Ok(id)
    }
}
