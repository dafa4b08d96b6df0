use super::entities::User;
use serde::{Deserialize, Serialize};

// 用户响应
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}
