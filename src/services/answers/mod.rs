pub mod create;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::answers::requests::{CreateAnswerRequest, UpdateAnswerRequest};
use crate::storage::Storage;

pub struct AnswerService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnswerService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_answers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_answers(self, request).await
    }

    pub async fn get_answer(&self, answer_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_answer(self, answer_id, request).await
    }

    pub async fn create_answer(
        &self,
        answer_data: CreateAnswerRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_answer(self, answer_data, request).await
    }

    // 部分更新答案，返回受影响行数
    pub async fn update_answer(
        &self,
        answer_id: i64,
        update_data: UpdateAnswerRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_answer(self, answer_id, update_data, request).await
    }
}
