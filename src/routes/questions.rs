use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::questions::requests::CreateQuestionRequest;
use crate::services::QuestionService;
use crate::utils::SafeIDI64;

static QUESTION_SERVICE: Lazy<QuestionService> = Lazy::new(QuestionService::new_lazy);

pub async fn list_questions(req: HttpRequest) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.list_questions(&req).await
}

pub async fn get_question(req: HttpRequest, question_id: SafeIDI64) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.get_question(question_id.0, &req).await
}

pub async fn create_question(
    req: HttpRequest,
    question_data: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .create_question(question_data.into_inner(), &req)
        .await
}

pub fn configure_questions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/questions")
            .route("", web::get().to(list_questions))
            .route("", web::post().to(create_question))
            .route("/{id}", web::get().to(get_question)),
    );
}
