use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::errors::MbtiError;
use crate::models::{ApiResponse, ErrorCode, courses::requests::CreateCourseRequest};
use crate::utils::validate::validate_create_course;

pub async fn create_course(
    service: &CourseService,
    mut course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    course_data.title = course_data.title.trim().to_string();

    if let Err(msg) = validate_create_course(&course_data) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CourseInvalid, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course '{}' created with id {}", course.title, course.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(course, "Course created successfully")))
        }
        Err(MbtiError::UniqueViolation(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::CourseAlreadyExists, "Course title already exists"),
        )),
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseCreationFailed,
                    format!("Course creation failed: {e}"),
                )),
            )
        }
    }
}
