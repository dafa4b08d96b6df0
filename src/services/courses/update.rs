use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::errors::MbtiError;
use crate::models::{ApiResponse, ErrorCode, courses::requests::UpdateCourseRequest};
use crate::utils::validate::validate_update_course;

pub async fn update_course(
    service: &CourseService,
    title: &str,
    mut update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    update_data.title = update_data.title.map(|t| t.trim().to_string());

    if let Err(msg) = validate_update_course(&update_data) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CourseInvalid, msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_course_by_title(title, update_data).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(course, "Course updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(MbtiError::UniqueViolation(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::CourseAlreadyExists, "Course title already exists"),
        )),
        Err(e) => {
            error!("Course update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseUpdateFailed,
                    format!("Course update failed: {e}"),
                )),
            )
        }
    }
}
