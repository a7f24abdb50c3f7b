//! Pure mappings between entities and transport DTOs.
//!
//! Entity-to-DTO conversions accept an optional input and yield `None` for
//! `None`. Create-payload conversions reject an absent payload with an
//! `invalid_request` error and leave the identifier for storage to assign.

use super::dto::{
    CourseDto, CreateCourseDto, CreateStudentDto, EnrollmentDto, StudentDto, UpdateCourseDto,
    UpdateStudentDto,
};
use super::{Course, Enrollment, Error, Student};

/// Message used when a create payload is missing entirely.
pub const MISSING_PAYLOAD_MESSAGE: &str = "Request body must not be empty";

impl From<&Student> for StudentDto {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.map(|id| id.get()),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
        }
    }
}

impl From<&Course> for CourseDto {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.map(|id| id.get()),
            name: course.name.clone(),
            description: course.description.clone(),
        }
    }
}

impl From<&Enrollment> for EnrollmentDto {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            id: enrollment.id.get(),
            student: StudentDto::from(&enrollment.student),
            course: CourseDto::from(&enrollment.course),
        }
    }
}

/// Convert a student entity into its read DTO.
pub fn student_to_dto(student: Option<&Student>) -> Option<StudentDto> {
    student.map(StudentDto::from)
}

/// Build an unsaved student from a create payload.
///
/// Missing fields become empty strings so validation reports them as
/// required.
pub fn student_from_create(dto: Option<&CreateStudentDto>) -> Result<Student, Error> {
    let dto = dto.ok_or_else(|| Error::invalid_request(MISSING_PAYLOAD_MESSAGE))?;
    Ok(Student::new(
        dto.first_name.clone().unwrap_or_default(),
        dto.last_name.clone().unwrap_or_default(),
        dto.email.clone().unwrap_or_default(),
    ))
}

/// Convert a course entity into its read DTO.
pub fn course_to_dto(course: Option<&Course>) -> Option<CourseDto> {
    course.map(CourseDto::from)
}

/// Build an unsaved course from a create payload.
pub fn course_from_create(dto: Option<&CreateCourseDto>) -> Result<Course, Error> {
    let dto = dto.ok_or_else(|| Error::invalid_request(MISSING_PAYLOAD_MESSAGE))?;
    Ok(Course::new(
        dto.name.clone().unwrap_or_default(),
        dto.description.clone().unwrap_or_default(),
    ))
}

/// Convert an enrollment into the composite DTO.
pub fn enrollment_to_dto(enrollment: Option<&Enrollment>) -> Option<EnrollmentDto> {
    enrollment.map(EnrollmentDto::from)
}

/// Merge the supplied fields of a partial update into `student`.
pub fn apply_student_update(student: &mut Student, update: UpdateStudentDto) {
    let UpdateStudentDto {
        first_name,
        last_name,
        email,
    } = update;
    if let Some(first_name) = first_name {
        student.first_name = first_name;
    }
    if let Some(last_name) = last_name {
        student.last_name = last_name;
    }
    if let Some(email) = email {
        student.email = email;
    }
}

/// Merge the supplied fields of a partial update into `course`.
pub fn apply_course_update(course: &mut Course, update: UpdateCourseDto) {
    if let Some(name) = update.name {
        course.name = name;
    }
    if let Some(description) = update.description {
        course.description = description;
    }
}
