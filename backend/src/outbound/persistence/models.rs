//! Row structs mapping Diesel tables to Rust types.
//!
//! Internal to the persistence layer; repositories convert them into domain
//! entities before returning.

use diesel::prelude::*;

use crate::domain::{Course, CourseId, Student, StudentId};

use super::schema::{courses, enrollments, students};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StudentRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::new(row.first_name, row.last_name, row.email).with_id(StudentId::new(row.id))
    }
}

/// Insert and update payload for `students`.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = students)]
pub(crate) struct StudentFields<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a Student> for StudentFields<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            first_name: &student.first_name,
            last_name: &student.last_name,
            email: &student.email,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CourseRow {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course::new(row.name, row.description).with_id(CourseId::new(row.id))
    }
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = courses)]
pub(crate) struct CourseFields<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a Course> for CourseFields<'a> {
    fn from(course: &'a Course) -> Self {
        Self {
            name: &course.name,
            description: &course.description,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = enrollments)]
pub(crate) struct NewEnrollmentRow {
    pub student_id: i64,
    pub course_id: i64,
}
