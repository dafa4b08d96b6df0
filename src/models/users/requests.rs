use super::entities::UserRole;
use crate::utils::patch::PartialUpdate;
use serde::{Deserialize, Serialize};

// 用户创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub role: Option<UserRole>,
    pub data_id: Option<String>,
}

// 用户更新请求
//
// `password` 是调用者的凭据：存在时必须与当前密码一致，本身不会被写入。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub password: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub data_id: Option<String>,
}

impl PartialUpdate for UpdateUserRequest {
    const LOOKUP_FIELDS: &'static [&'static str] = &["id", "password"];
}

// 按邮箱查询用户
#[derive(Debug, Deserialize)]
pub struct UserLookupQuery {
    pub email: Option<String>,
}

// 登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
