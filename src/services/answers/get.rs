use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnswerService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_answer(
    service: &AnswerService,
    answer_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_answer_by_id(answer_id).await {
        Ok(Some(answer)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            answer,
            "Answer retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnswerNotFound,
            "Answer not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get answer: {e}"),
            )),
        ),
    }
}
