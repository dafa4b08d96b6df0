use super::SeaOrmStorage;
use crate::entity::answers::{ActiveModel, Column, Entity as Answers};
use crate::errors::{MbtiError, Result};
use crate::models::answers::{
    entities::Answer,
    requests::{CreateAnswerRequest, UpdateAnswerRequest},
};
use crate::utils::PartialUpdate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, sea_query::Expr,
};
use tracing::warn;

impl SeaOrmStorage {
    pub async fn list_answers_impl(&self) -> Result<Vec<Answer>> {
        let answers = Answers::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MbtiError::database_operation(format!("Failed to list answers: {e}")))?;

        Ok(answers.into_iter().map(|m| m.into_answer()).collect())
    }

    pub async fn get_answer_by_id_impl(&self, id: i64) -> Result<Option<Answer>> {
        let result = Answers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MbtiError::database_operation(format!("Failed to query answer: {e}")))?;

        Ok(result.map(|m| m.into_answer()))
    }

    /// 创建答案，所属问题不存在时返回外键错误
    pub async fn create_answer_impl(&self, req: CreateAnswerRequest) -> Result<Answer> {
        let model = ActiveModel {
            answer_type: Set(req.answer_type),
            question_id: Set(req.question),
            contents: Set(req.contents),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| MbtiError::from_db("Failed to create answer", e))?;

        Ok(result.into_answer())
    }

    /// 部分更新答案
    ///
    /// 存在性检查只记录日志，不阻止更新；返回实际影响的行数。
    pub async fn update_answer_impl(&self, id: i64, update: UpdateAnswerRequest) -> Result<u64> {
        match self.get_answer_by_id_impl(id).await {
            Ok(Some(_)) => {}
            Ok(None) => warn!("Patching answer {} which does not exist", id),
            Err(e) => warn!("Existence check for answer {} failed: {}", id, e),
        }

        let Some(changes) = update.changes()? else {
            return Ok(0);
        };

        let mut stmt = Answers::update_many().filter(Column::Id.eq(id));

        if let Some(answer_type) = changes.answer_type {
            stmt = stmt.col_expr(Column::AnswerType, Expr::value(answer_type));
        }

        if let Some(question) = changes.question {
            stmt = stmt.col_expr(Column::QuestionId, Expr::value(question));
        }

        if let Some(contents) = changes.contents {
            stmt = stmt.col_expr(Column::Contents, Expr::value(contents));
        }

        let result = stmt
            .exec(&self.db)
            .await
            .map_err(|e| MbtiError::from_db("Failed to update answer", e))?;

        Ok(result.rows_affected)
    }
}
