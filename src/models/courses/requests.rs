use super::entities::CourseSort;
use crate::models::common::PaginationQuery;
use crate::utils::patch::PartialUpdate;
use serde::{Deserialize, Serialize};

// 课程列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct CourseListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub sort: Option<CourseSort>,
}

// 创建课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub link: String,
    pub img_link: String,
    pub rating: f64,
    pub price: i64,
}

// 更新课程请求，课程由路径中的标题定位，body 中的 title 表示改名
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub link: Option<String>,
    pub img_link: Option<String>,
    pub rating: Option<f64>,
    pub price: Option<i64>,
}

impl PartialUpdate for UpdateCourseRequest {
    const LOOKUP_FIELDS: &'static [&'static str] = &["id"];
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<CourseSort>,
}
