//! Field rules for students and courses.
//!
//! Each entity has an ordered table of [`FieldRule`]s. Rules run in table
//! order and the first failure is reported; later rules are not evaluated.
//! Failures are surfaced as `invalid_request` errors whose details carry the
//! offending field and a stable rule code.
//!
//! Email uniqueness needs the student repository, so it is checked by the
//! service once every static rule has passed. [`duplicate_email`] builds the
//! matching error.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::json;
use tracing::error;

use super::{Course, Error, Student};

/// Maximum characters in a first or last name.
pub const NAME_MAX: usize = 50;
/// Minimum characters in a first or last name.
pub const PERSON_NAME_MIN: usize = 2;
/// Maximum characters in an email address.
pub const EMAIL_MAX: usize = 100;
/// Maximum characters in a course description.
pub const DESCRIPTION_MAX: usize = 1000;

/// A single check applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Present and not blank after trimming.
    Required,
    /// Character count within `min..=max`.
    Length { min: usize, max: usize },
    /// Character count at most `max`.
    MaxLength(usize),
    /// Looks like an email address.
    Email,
}

impl Constraint {
    /// Stable code placed in error details.
    pub fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Length { .. } | Self::MaxLength(_) => "length",
            Self::Email => "email_format",
        }
    }

    /// Whether `value` satisfies the constraint.
    pub fn is_satisfied_by(self, value: &str) -> bool {
        match self {
            Self::Required => !value.trim().is_empty(),
            Self::Length { min, max } => {
                let count = value.chars().count();
                (min..=max).contains(&count)
            }
            Self::MaxLength(max) => value.chars().count() <= max,
            Self::Email => email_matches(value),
        }
    }
}

/// One (constraint, message) pair bound to a field of `T`.
pub struct FieldRule<T> {
    /// camelCase wire name of the field.
    pub field: &'static str,
    /// Reads the checked value from the record.
    pub value: fn(&T) -> &str,
    /// Check applied to the value.
    pub constraint: Constraint,
    /// Client-facing message when the check fails.
    pub message: &'static str,
}

fn first_name(student: &Student) -> &str {
    &student.first_name
}

fn last_name(student: &Student) -> &str {
    &student.last_name
}

fn email(student: &Student) -> &str {
    &student.email
}

fn course_name(course: &Course) -> &str {
    &course.name
}

fn description(course: &Course) -> &str {
    &course.description
}

/// Student rules in evaluation order.
pub static STUDENT_RULES: [FieldRule<Student>; 7] = [
    FieldRule {
        field: "firstName",
        value: first_name,
        constraint: Constraint::Required,
        message: "First name is required",
    },
    FieldRule {
        field: "firstName",
        value: first_name,
        constraint: Constraint::Length {
            min: PERSON_NAME_MIN,
            max: NAME_MAX,
        },
        message: "First name must be between 2 and 50 characters",
    },
    FieldRule {
        field: "lastName",
        value: last_name,
        constraint: Constraint::Required,
        message: "Last name is required",
    },
    FieldRule {
        field: "lastName",
        value: last_name,
        constraint: Constraint::Length {
            min: PERSON_NAME_MIN,
            max: NAME_MAX,
        },
        message: "Last name must be between 2 and 50 characters",
    },
    FieldRule {
        field: "email",
        value: email,
        constraint: Constraint::Required,
        message: "Email is required",
    },
    FieldRule {
        field: "email",
        value: email,
        constraint: Constraint::Email,
        message: "Invalid email format",
    },
    FieldRule {
        field: "email",
        value: email,
        constraint: Constraint::MaxLength(EMAIL_MAX),
        message: "Email must not exceed 100 characters",
    },
];

/// Course rules in evaluation order.
pub static COURSE_RULES: [FieldRule<Course>; 4] = [
    FieldRule {
        field: "name",
        value: course_name,
        constraint: Constraint::Required,
        message: "Name is required",
    },
    FieldRule {
        field: "name",
        value: course_name,
        constraint: Constraint::Length {
            min: 1,
            max: NAME_MAX,
        },
        message: "Name must be between 1 and 50 characters",
    },
    FieldRule {
        field: "description",
        value: description,
        constraint: Constraint::Required,
        message: "Description is required",
    },
    FieldRule {
        field: "description",
        value: description,
        constraint: Constraint::Length {
            min: 1,
            max: DESCRIPTION_MAX,
        },
        message: "Description must be between 1 and 1000 characters",
    },
];

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn email_matches(value: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| {
            let pattern = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$";
            Regex::new(pattern)
                .map_err(|error| error!(%error, "email pattern failed to compile"))
                .ok()
        })
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Run `rules` against `subject`, returning the first failure.
pub fn check<T>(rules: &[FieldRule<T>], subject: &T) -> Result<(), Error> {
    match rules
        .iter()
        .find(|rule| !rule.constraint.is_satisfied_by((rule.value)(subject)))
    {
        Some(rule) => Err(Error::invalid_request(rule.message).with_details(json!({
            "field": rule.field,
            "code": rule.constraint.code(),
        }))),
        None => Ok(()),
    }
}

/// Validate every static student rule.
pub fn validate_student(student: &Student) -> Result<(), Error> {
    check(&STUDENT_RULES, student)
}

/// Validate every course rule.
pub fn validate_course(course: &Course) -> Result<(), Error> {
    check(&COURSE_RULES, course)
}

/// Error raised when another student already holds `email`.
pub fn duplicate_email(email: &str) -> Error {
    Error::invalid_request(format!("The email '{email}' is already in use")).with_details(json!({
        "field": "email",
        "code": "duplicate_email",
    }))
}
