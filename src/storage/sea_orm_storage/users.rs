use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{MbtiError, Result};
use crate::models::users::{
    entities::{User, UserRole},
    requests::{CreateUserRequest, UpdateUserRequest},
};
use crate::utils::PartialUpdate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.unwrap_or(UserRole::User).to_string()),
            data_id: Set(req
                .data_id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())),
            created_at: Set(now),
            last_login: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| MbtiError::from_db("Failed to create user", e))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MbtiError::database_operation(format!("Failed to query user: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| MbtiError::database_operation(format!("Failed to query user: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                MbtiError::database_operation(format!("Failed to update last login: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 部分更新用户
    ///
    /// 补丁只含定位字段（id / password）时不写库，直接返回现有记录。
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let Some(existing) = self.get_user_by_id_impl(id).await? else {
            return Ok(None);
        };

        let Some(changes) = update.changes()? else {
            return Ok(Some(existing));
        };

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(email) = changes.email {
            model.email = Set(email);
        }

        if let Some(role) = changes.role {
            model.role = Set(role.to_string());
        }

        if let Some(data_id) = changes.data_id {
            model.data_id = Set(data_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| MbtiError::from_db("Failed to update user", e))?;

        self.get_user_by_id_impl(id).await
    }
}
