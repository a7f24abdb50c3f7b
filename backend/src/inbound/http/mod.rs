//! HTTP inbound adapter exposing REST endpoints.

pub mod courses;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod students;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

use actix_web::web;

use self::error::{json_error_handler, path_error_handler};

/// Register every `/api/v1` resource handler.
///
/// Body and path extraction failures answer with the JSON error shape.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(students::create_student)
            .service(students::list_students)
            .service(students::get_student)
            .service(students::update_student)
            .service(students::delete_student)
            .service(students::enroll)
            .service(courses::create_course)
            .service(courses::list_courses)
            .service(courses::get_course)
            .service(courses::update_course)
            .service(courses::delete_course),
    );
}
