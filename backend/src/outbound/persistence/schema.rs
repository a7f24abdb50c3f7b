//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered students. `email` carries the `students_email_key` unique
    /// constraint.
    students (id) {
        id -> Int8,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Varchar,
    }
}

diesel::table! {
    courses (id) {
        id -> Int8,
        name -> Varchar,
        description -> Varchar,
    }
}

diesel::table! {
    /// Student/course join rows, unique per pair and cascading from both
    /// parents.
    enrollments (id) {
        id -> Int8,
        student_id -> Int8,
        course_id -> Int8,
    }
}

diesel::joinable!(enrollments -> students (student_id));
diesel::joinable!(enrollments -> courses (course_id));

diesel::allow_tables_to_appear_in_same_query!(courses, enrollments, students);
