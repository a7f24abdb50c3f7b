//! Tests for the student service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::dto::CreateCourseDto;
use crate::domain::ports::{
    CoursesCommand, CoursesQuery, MockCourseRepository, MockEnrollmentRepository,
    MockStudentRepository,
};
use crate::domain::{CourseService, EnrollmentId, ErrorCode};
use crate::test_support::InMemoryEducationStore;

type StoreBackedService =
    StudentService<InMemoryEducationStore, InMemoryEducationStore, InMemoryEducationStore>;

struct Harness {
    store: Arc<InMemoryEducationStore>,
    students: StoreBackedService,
    courses: CourseService<InMemoryEducationStore>,
}

#[fixture]
fn harness() -> Harness {
    let store = Arc::new(InMemoryEducationStore::default());
    Harness {
        students: StudentService::new(store.clone(), store.clone(), store.clone()),
        courses: CourseService::new(store.clone()),
        store,
    }
}

fn ada() -> CreateStudentDto {
    CreateStudentDto {
        first_name: Some("Ada".into()),
        last_name: Some("Lovelace".into()),
        email: Some("ada@example.com".into()),
    }
}

fn grace() -> CreateStudentDto {
    CreateStudentDto {
        first_name: Some("Grace".into()),
        last_name: Some("Hopper".into()),
        email: Some("grace@example.com".into()),
    }
}

async fn create_course(harness: &Harness, name: &str) -> CourseId {
    let dto = harness
        .courses
        .create_course(Some(CreateCourseDto {
            name: Some(name.into()),
            description: Some(format!("All about {name}.")),
        }))
        .await
        .expect("create course");
    CourseId::new(dto.id.expect("course id"))
}

async fn create_student(harness: &Harness, payload: CreateStudentDto) -> StudentId {
    let dto = harness
        .students
        .create_student(Some(payload))
        .await
        .expect("create student");
    StudentId::new(dto.id.expect("student id"))
}

#[rstest]
#[tokio::test]
async fn create_echoes_fields_and_assigns_unique_ids(harness: Harness) {
    let first = harness
        .students
        .create_student(Some(ada()))
        .await
        .expect("ada");
    let second = harness
        .students
        .create_student(Some(grace()))
        .await
        .expect("grace");

    assert_eq!(first.first_name, "Ada");
    assert_eq!(first.last_name, "Lovelace");
    assert_eq!(first.email, "ada@example.com");
    assert!(first.id.is_some());
    assert_ne!(first.id, second.id);
}

#[rstest]
#[tokio::test]
async fn create_rejects_duplicate_email_without_inserting(harness: Harness) {
    create_student(&harness, ada()).await;
    let clash = CreateStudentDto {
        first_name: Some("Augusta".into()),
        ..ada()
    };

    let error = harness
        .students
        .create_student(Some(clash))
        .await
        .expect_err("duplicate email");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "The email 'ada@example.com' is already in use");
    assert_eq!(harness.store.student_count(), 1);
}

#[rstest]
#[tokio::test]
async fn create_rejects_absent_payload(harness: Harness) {
    let error = harness
        .students
        .create_student(None)
        .await
        .expect_err("absent payload");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn update_changes_only_supplied_fields(harness: Harness) {
    let id = create_student(&harness, ada()).await;

    let updated = harness
        .students
        .update_student(
            id,
            UpdateStudentDto {
                first_name: Some("Augusta".into()),
                ..UpdateStudentDto::default()
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.last_name, "Lovelace");
    assert_eq!(updated.email, "ada@example.com");
}

#[rstest]
#[tokio::test]
async fn update_allows_keeping_own_email(harness: Harness) {
    let id = create_student(&harness, ada()).await;
    let result = harness
        .students
        .update_student(
            id,
            UpdateStudentDto {
                email: Some("ada@example.com".into()),
                ..UpdateStudentDto::default()
            },
        )
        .await;
    assert!(result.is_ok());
}

#[rstest]
#[tokio::test]
async fn update_rejects_email_of_another_student(harness: Harness) {
    create_student(&harness, ada()).await;
    let grace_id = create_student(&harness, grace()).await;

    let error = harness
        .students
        .update_student(
            grace_id,
            UpdateStudentDto {
                email: Some("ada@example.com".into()),
                ..UpdateStudentDto::default()
            },
        )
        .await
        .expect_err("email taken");
    assert_eq!(error.details().expect("details")["code"], "duplicate_email");
}

#[rstest]
#[tokio::test]
async fn update_of_missing_student_is_not_found(harness: Harness) {
    let error = harness
        .students
        .update_student(StudentId::new(99), UpdateStudentDto::default())
        .await
        .expect_err("missing");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Student not found with id: 99");
}

#[rstest]
#[tokio::test]
async fn enroll_twice_conflicts_and_keeps_single_record(harness: Harness) {
    let student = create_student(&harness, ada()).await;
    let course = create_course(&harness, "Mathematics").await;

    let enrollment = harness
        .students
        .enroll(student, course)
        .await
        .expect("first enrollment");
    assert_eq!(enrollment.student.id, Some(student.get()));
    assert_eq!(enrollment.course.id, Some(course.get()));

    let error = harness
        .students
        .enroll(student, course)
        .await
        .expect_err("second enrollment");
    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.message(), ALREADY_ENROLLED_MESSAGE);
    assert_eq!(harness.store.enrollment_count_for(student, course), 1);
}

#[rstest]
#[case::missing_student(false, true, "Student not found with id: ")]
#[case::missing_course(true, false, "Course not found with id: ")]
#[tokio::test]
async fn enroll_with_missing_side_is_not_found(
    harness: Harness,
    #[case] student_exists: bool,
    #[case] course_exists: bool,
    #[case] message_prefix: &str,
) {
    let student = if student_exists {
        create_student(&harness, ada()).await
    } else {
        StudentId::new(500)
    };
    let course = if course_exists {
        create_course(&harness, "Mathematics").await
    } else {
        CourseId::new(600)
    };

    let error = harness
        .students
        .enroll(student, course)
        .await
        .expect_err("not found");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert!(error.message().starts_with(message_prefix));
    assert_eq!(harness.store.enrollment_count(), 0);
}

#[rstest]
#[tokio::test]
async fn deleting_student_removes_enrollments_but_keeps_courses(harness: Harness) {
    let student = create_student(&harness, ada()).await;
    let maths = create_course(&harness, "Mathematics").await;
    let science = create_course(&harness, "Science").await;
    harness.students.enroll(student, maths).await.expect("maths");
    harness.students.enroll(student, science).await.expect("science");

    harness.students.delete_student(student).await.expect("delete");

    assert_eq!(harness.store.enrollment_count(), 0);
    assert!(harness.courses.get_course(maths).await.is_ok());
    assert!(harness.courses.get_course(science).await.is_ok());
    let error = harness.students.get_student(student).await.expect_err("gone");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn deleting_course_removes_enrollments_but_keeps_students(harness: Harness) {
    let ada_id = create_student(&harness, ada()).await;
    let grace_id = create_student(&harness, grace()).await;
    let course = create_course(&harness, "Mathematics").await;
    harness.students.enroll(ada_id, course).await.expect("ada");
    harness.students.enroll(grace_id, course).await.expect("grace");

    harness.courses.delete_course(course).await.expect("delete");

    assert_eq!(harness.store.enrollment_count(), 0);
    assert!(harness.students.get_student(ada_id).await.is_ok());
    assert!(harness.students.get_student(grace_id).await.is_ok());
}

#[rstest]
#[tokio::test]
async fn list_orders_by_identifier(harness: Harness) {
    create_student(&harness, ada()).await;
    create_student(&harness, grace()).await;

    let ids: Vec<_> = harness
        .students
        .list_students()
        .await
        .expect("list")
        .into_iter()
        .filter_map(|student| student.id)
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 2);
}

fn mock_service(
    students: MockStudentRepository,
    courses: MockCourseRepository,
    enrollments: MockEnrollmentRepository,
) -> StudentService<MockStudentRepository, MockCourseRepository, MockEnrollmentRepository> {
    StudentService::new(Arc::new(students), Arc::new(courses), Arc::new(enrollments))
}

fn stored_student(id: i64) -> Student {
    Student::new("Ada", "Lovelace", "ada@example.com").with_id(StudentId::new(id))
}

fn stored_course(id: i64) -> Course {
    Course::new("Mathematics", "Numbers.").with_id(CourseId::new(id))
}

#[rstest]
#[case::unique_violation(EnrollmentRepositoryError::duplicate(), ErrorCode::Conflict)]
#[case::student_vanished(EnrollmentRepositoryError::student_missing(1_i64), ErrorCode::NotFound)]
#[case::course_vanished(EnrollmentRepositoryError::course_missing(2_i64), ErrorCode::NotFound)]
#[case::connection(EnrollmentRepositoryError::connection("down"), ErrorCode::ServiceUnavailable)]
#[case::query(EnrollmentRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn enroll_maps_storage_failures(
    #[case] failure: EnrollmentRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut students = MockStudentRepository::new();
    students
        .expect_find_by_id()
        .return_once(|id| Ok(Some(stored_student(id.get()))));
    let mut courses = MockCourseRepository::new();
    courses
        .expect_find_by_id()
        .return_once(|id| Ok(Some(stored_course(id.get()))));
    let mut enrollments = MockEnrollmentRepository::new();
    enrollments
        .expect_course_ids_for_student()
        .return_once(|_| Ok(Vec::new()));
    enrollments
        .expect_insert()
        .times(1)
        .return_once(move |_, _| Err(failure));

    let service = mock_service(students, courses, enrollments);
    let error = service
        .enroll(StudentId::new(1), CourseId::new(2))
        .await
        .expect_err("storage failure");
    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn enroll_returns_composite_payload() {
    let mut students = MockStudentRepository::new();
    students
        .expect_find_by_id()
        .return_once(|id| Ok(Some(stored_student(id.get()))));
    let mut courses = MockCourseRepository::new();
    courses
        .expect_find_by_id()
        .return_once(|id| Ok(Some(stored_course(id.get()))));
    let mut enrollments = MockEnrollmentRepository::new();
    enrollments
        .expect_course_ids_for_student()
        .return_once(|_| Ok(vec![CourseId::new(8)]));
    enrollments
        .expect_insert()
        .return_once(|_, _| Ok(EnrollmentId::new(31)));

    let service = mock_service(students, courses, enrollments);
    let dto = service
        .enroll(StudentId::new(1), CourseId::new(2))
        .await
        .expect("enrolled");
    assert_eq!(dto.id, 31);
    assert_eq!(dto.student.email, "ada@example.com");
    assert_eq!(dto.course.name, "Mathematics");
}

#[tokio::test]
async fn storage_unique_violation_on_email_maps_to_validation_error() {
    let mut students = MockStudentRepository::new();
    students.expect_email_in_use().return_once(|_, _| Ok(false));
    students
        .expect_insert()
        .return_once(|student| Err(StudentRepositoryError::duplicate_email(student.email.clone())));

    let service = mock_service(
        students,
        MockCourseRepository::new(),
        MockEnrollmentRepository::new(),
    );
    let error = service
        .create_student(Some(ada()))
        .await
        .expect_err("race lost");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "The email 'ada@example.com' is already in use");
}

#[tokio::test]
async fn invalid_student_never_reaches_storage() {
    let mut students = MockStudentRepository::new();
    students.expect_email_in_use().never();
    students.expect_insert().never();

    let service = mock_service(
        students,
        MockCourseRepository::new(),
        MockEnrollmentRepository::new(),
    );
    let error = service
        .create_student(Some(CreateStudentDto {
            email: Some("nope".into()),
            ..ada()
        }))
        .await
        .expect_err("invalid email");
    assert_eq!(error.message(), "Invalid email format");
}

#[tokio::test]
async fn connection_failure_on_lookup_is_service_unavailable() {
    let mut students = MockStudentRepository::new();
    students
        .expect_find_by_id()
        .return_once(|_| Err(StudentRepositoryError::connection("refused")));

    let service = mock_service(
        students,
        MockCourseRepository::new(),
        MockEnrollmentRepository::new(),
    );
    let error = service
        .get_student(StudentId::new(1))
        .await
        .expect_err("unavailable");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
