//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{MbtiError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    courses::{
        entities::{Course, CourseSort},
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::{PartialUpdate, escape_like_pattern};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    sea_query::LikeExpr,
};

impl SeaOrmStorage {
    /// 列出全部课程
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| MbtiError::database_operation(format!("Failed to list courses: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let (page, size) = PaginationQuery::normalize(query.page, query.size);

        let mut select = Courses::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let pattern = format!("%{}%", escape_like_pattern(search.trim()));
            select = select.filter(Column::Title.like(LikeExpr::new(pattern).escape('\\')));
        }

        select = match query.sort.unwrap_or_default() {
            CourseSort::Id => select.order_by_asc(Column::Id),
            CourseSort::Title => select.order_by_asc(Column::Title),
            CourseSort::Rating => select.order_by_desc(Column::Rating).order_by_asc(Column::Id),
            CourseSort::Price => select.order_by_asc(Column::Price).order_by_asc(Column::Id),
        };

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| MbtiError::database_operation(format!("Failed to count courses: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            MbtiError::database_operation(format!("Failed to count course pages: {e}"))
        })?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| MbtiError::database_operation(format!("Failed to list courses: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| MbtiError::database_operation(format!("Failed to query course: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 通过标题获取课程
    pub async fn get_course_by_title_impl(&self, title: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Title.eq(title))
            .one(&self.db)
            .await
            .map_err(|e| MbtiError::database_operation(format!("Failed to query course: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let model = ActiveModel {
            title: Set(req.title),
            link: Set(req.link),
            img_link: Set(req.img_link),
            rating: Set(req.rating),
            price: Set(req.price),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| MbtiError::from_db("Failed to create course", e))?;

        Ok(result.into_course())
    }

    /// 按标题定位并部分更新课程
    pub async fn update_course_by_title_impl(
        &self,
        title: &str,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let Some(existing) = self.get_course_by_title_impl(title).await? else {
            return Ok(None);
        };

        let Some(changes) = update.changes()? else {
            return Ok(Some(existing));
        };

        let mut model = ActiveModel {
            id: Set(existing.id),
            ..Default::default()
        };

        if let Some(new_title) = changes.title {
            model.title = Set(new_title);
        }

        if let Some(link) = changes.link {
            model.link = Set(link);
        }

        if let Some(img_link) = changes.img_link {
            model.img_link = Set(img_link);
        }

        if let Some(rating) = changes.rating {
            model.rating = Set(rating);
        }

        if let Some(price) = changes.price {
            model.price = Set(price);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| MbtiError::from_db("Failed to update course", e))?;

        Ok(Some(result.into_course()))
    }
}
