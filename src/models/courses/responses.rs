use super::entities::Course;
use crate::models::common::PaginatedResponse;

pub type CourseListResponse = PaginatedResponse<Course>;
