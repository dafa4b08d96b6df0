use crate::utils::patch::PartialUpdate;
use serde::{Deserialize, Serialize};

// 创建答案请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnswerRequest {
    #[serde(rename = "type")]
    pub answer_type: String,
    pub question: i64,
    pub contents: String,
}

// 更新答案请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAnswerRequest {
    #[serde(rename = "type")]
    pub answer_type: Option<String>,
    pub question: Option<i64>,
    pub contents: Option<String>,
}

impl PartialUpdate for UpdateAnswerRequest {
    const LOOKUP_FIELDS: &'static [&'static str] = &["id"];
}
