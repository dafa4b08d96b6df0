//! 配置管理
//!
//! 分层加载：`config.toml` → `config.{APP_ENV}.toml` → `MBTI_*` 环境变量（嵌套字段用 `__` 分隔，如 `MBTI_SERVER__PORT`）。

mod r#impl;
mod structs;

pub use structs::*;
