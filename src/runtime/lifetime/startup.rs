use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 安装 TLS provider，连接数据库并执行迁移
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    match storage.list_questions().await {
        Ok(questions) if questions.is_empty() => {
            warn!("No MBTI questions found, the quiz page will be empty until questions are created");
        }
        Ok(questions) => debug!("{} MBTI questions loaded", questions.len()),
        Err(e) => warn!("Failed to count MBTI questions: {}", e),
    }

    StartupContext { storage }
}
