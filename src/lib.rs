//! MBTI - 性格测试与课程推荐后端服务
//!
//! 基于 Actix Web 构建，提供用户、课程、问答接口和 MBTI 静态页面。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 请求日志与限流中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由与静态页面
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
