//! 数据模型定义
//!
//! 每个子模块按 entities / requests / responses 划分。

pub mod answers;
pub mod common;
pub mod courses;
pub mod questions;
pub mod users;

pub use common::{ApiResponse, ErrorCode, PaginatedResponse, PaginationInfo, PaginationQuery};
