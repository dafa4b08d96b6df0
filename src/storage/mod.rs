use std::sync::Arc;

use crate::models::{
    answers::{
        entities::Answer,
        requests::{CreateAnswerRequest, UpdateAnswerRequest},
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    questions::{entities::Question, requests::CreateQuestionRequest},
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 持久化层接口
///
/// 查找类方法用 `Ok(None)` 表示记录不存在，由服务层转成 404。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户目录
    // 创建用户（密码需已哈希；未给出角色时为 user，未给出 data_id 时生成 UUID）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 更新最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 部分更新用户，定位字段不会被写入
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;

    /// 课程目录
    async fn list_courses(&self) -> Result<Vec<Course>>;
    async fn list_courses_with_pagination(&self, query: CourseListQuery)
    -> Result<CourseListResponse>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn get_course_by_title(&self, title: &str) -> Result<Option<Course>>;
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 按标题定位并部分更新课程
    async fn update_course_by_title(
        &self,
        title: &str,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;

    /// 问题
    async fn list_questions(&self) -> Result<Vec<Question>>;
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    async fn create_question(&self, question: CreateQuestionRequest) -> Result<Question>;

    /// 答案
    async fn list_answers(&self) -> Result<Vec<Answer>>;
    async fn get_answer_by_id(&self, id: i64) -> Result<Option<Answer>>;
    async fn create_answer(&self, answer: CreateAnswerRequest) -> Result<Answer>;
    // 无论记录是否存在都执行更新，返回受影响的行数
    async fn update_answer(&self, id: i64, update: UpdateAnswerRequest) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
