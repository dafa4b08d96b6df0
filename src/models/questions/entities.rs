use serde::{Deserialize, Serialize};

// 测验问题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(rename = "type")]
    pub question_type: String,
    pub contents: String,
}
