use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnswerService;
use crate::models::{ApiResponse, ErrorCode, answers::responses::AnswerListResponse};

pub async fn list_answers(
    service: &AnswerService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_answers().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AnswerListResponse { items },
            "Answer list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get answer list: {e}"),
            )),
        ),
    }
}
