use serde::Deserialize;

// 创建问题请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(rename = "type")]
    pub question_type: String,
    pub contents: String,
}
