use serde::{Deserialize, Serialize};

// 课程实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub link: String,
    pub img_link: String,
    pub rating: f64,
    pub price: i64,
}

// 课程列表排序字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseSort {
    #[default]
    Id,
    Title,
    Rating,
    Price,
}
