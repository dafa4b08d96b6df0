use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::answers::requests::{CreateAnswerRequest, UpdateAnswerRequest};
use crate::services::AnswerService;
use crate::utils::SafeIDI64;

static ANSWER_SERVICE: Lazy<AnswerService> = Lazy::new(AnswerService::new_lazy);

pub async fn list_answers(req: HttpRequest) -> ActixResult<HttpResponse> {
    ANSWER_SERVICE.list_answers(&req).await
}

pub async fn get_answer(req: HttpRequest, answer_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ANSWER_SERVICE.get_answer(answer_id.0, &req).await
}

pub async fn create_answer(
    req: HttpRequest,
    answer_data: web::Json<CreateAnswerRequest>,
) -> ActixResult<HttpResponse> {
    ANSWER_SERVICE.create_answer(answer_data.into_inner(), &req).await
}

pub async fn update_answer(
    req: HttpRequest,
    answer_id: SafeIDI64,
    update_data: web::Json<UpdateAnswerRequest>,
) -> ActixResult<HttpResponse> {
    ANSWER_SERVICE
        .update_answer(answer_id.0, update_data.into_inner(), &req)
        .await
}

pub fn configure_answers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/answers")
            .route("", web::get().to(list_answers))
            .route("", web::post().to(create_answer))
            .route("/{id}", web::get().to(get_answer))
            .route("/{id}", web::patch().to(update_answer)),
    );
}
