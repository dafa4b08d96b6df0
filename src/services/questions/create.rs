use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::QuestionService;
use crate::models::{ApiResponse, ErrorCode, questions::requests::CreateQuestionRequest};
use crate::utils::validate::validate_non_blank;

pub async fn create_question(
    service: &QuestionService,
    question_data: CreateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_non_blank(&question_data.question_type, "type")
        .and_then(|_| validate_non_blank(&question_data.contents, "contents"))
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::QuestionInvalid, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_question(question_data).await {
        Ok(question) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(question, "Question created successfully"))),
        Err(e) => {
            error!("Question creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Question creation failed: {e}"),
                )),
            )
        }
    }
}
