use super::SeaOrmStorage;
use crate::entity::questions::{ActiveModel, Column, Entity as Questions};
use crate::errors::{MbtiError, Result};
use crate::models::questions::{entities::Question, requests::CreateQuestionRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_questions_impl(&self) -> Result<Vec<Question>> {
        let questions = Questions::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MbtiError::database_operation(format!("Failed to list questions: {e}")))?;

        Ok(questions.into_iter().map(|m| m.into_question()).collect())
    }

    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MbtiError::database_operation(format!("Failed to query question: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    pub async fn create_question_impl(&self, req: CreateQuestionRequest) -> Result<Question> {
        let model = ActiveModel {
            question_type: Set(req.question_type),
            contents: Set(req.contents),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| MbtiError::from_db("Failed to create question", e))?;

        Ok(result.into_question())
    }
}
