use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AnswerService;
use crate::errors::MbtiError;
use crate::models::{
    ApiResponse, ErrorCode,
    answers::{requests::UpdateAnswerRequest, responses::AnswerPatchResponse},
};
use crate::utils::validate::validate_non_blank;

fn validate_patch(update: &UpdateAnswerRequest) -> Result<(), String> {
    if let Some(answer_type) = &update.answer_type {
        validate_non_blank(answer_type, "type")?;
    }
    if let Some(contents) = &update.contents {
        validate_non_blank(contents, "contents")?;
    }
    if let Some(question) = update.question
        && question <= 0
    {
        return Err("question must be a positive id".to_string());
    }
    Ok(())
}

pub async fn update_answer(
    service: &AnswerService,
    answer_id: i64,
    update_data: UpdateAnswerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_patch(&update_data) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::AnswerInvalid, msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_answer(answer_id, update_data).await {
        Ok(rows_affected) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AnswerPatchResponse {
                id: answer_id,
                rows_affected,
            },
            "Answer patch applied",
        ))),
        Err(MbtiError::ForeignKeyViolation(_)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::QuestionNotFound, "Question does not exist"),
        )),
        Err(e) => {
            error!("Answer update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AnswerUpdateFailed,
                    format!("Answer update failed: {e}"),
                )),
            )
        }
    }
}
