use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AnswerService;
use crate::errors::MbtiError;
use crate::models::{ApiResponse, ErrorCode, answers::requests::CreateAnswerRequest};
use crate::utils::validate::validate_non_blank;

pub async fn create_answer(
    service: &AnswerService,
    answer_data: CreateAnswerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_non_blank(&answer_data.answer_type, "type")
        .and_then(|_| validate_non_blank(&answer_data.contents, "contents"))
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::AnswerInvalid, msg)));
    }

    if answer_data.question <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AnswerInvalid,
            "question must be a positive id",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_answer(answer_data).await {
        Ok(answer) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(answer, "Answer created successfully"))),
        Err(MbtiError::ForeignKeyViolation(_)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::QuestionNotFound, "Question does not exist"),
        )),
        Err(e) => {
            error!("Answer creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AnswerCreationFailed,
                    format!("Answer creation failed: {e}"),
                )),
            )
        }
    }
}
