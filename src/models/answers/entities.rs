use serde::{Deserialize, Serialize};

// 问题的候选答案，`question` 指向所属问题的 ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    #[serde(rename = "type")]
    pub answer_type: String,
    pub question: i64,
    pub contents: String,
}
