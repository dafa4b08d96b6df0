use super::entities::Question;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub items: Vec<Question>,
}
