use super::entities::Answer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerListResponse {
    pub items: Vec<Answer>,
}

// 补丁结果：即使记录不存在也会执行更新，这里报告实际影响的行数
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerPatchResponse {
    pub id: i64,
    pub rows_affected: u64,
}
