use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::errors::Result;
use crate::models::courses::entities::Course;
use crate::models::{ApiResponse, ErrorCode};

fn course_response(result: Result<Option<Course>>) -> HttpResponse {
    match result {
        Ok(Some(course)) => HttpResponse::Ok().json(ApiResponse::success(
            course,
            "Course retrieved successfully",
        )),
        Ok(None) => HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        )),
        Err(e) => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Failed to get course: {e}"),
        )),
    }
}

pub async fn get_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    Ok(course_response(storage.get_course_by_id(course_id).await))
}

pub async fn get_course_by_title(
    service: &CourseService,
    title: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    Ok(course_response(storage.get_course_by_title(title).await))
}
