use crate::models::seed::PageSeed;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载数据并转换为 PageSeed 对象
pub async fn load_seed_file(seed_file_path: &Path) -> Result<PageSeed> {
    let content = fs::read_to_string(seed_file_path)
        .await
        .with_context(|| format!("无法读取种子文件: {}", seed_file_path.display()))?;

    let seed: PageSeed = toml::from_str(&content)
        .with_context(|| format!("无法解析种子文件: {}", seed_file_path.display()))?;

    Ok(seed)
}

/// 加载种子文件，文件不存在时退回默认值
///
/// 页面正常情况下总是由服务端注入初始数据；本地没有种子文件时
/// 用空列表和默认挑战标识启动，方便直接试用
pub async fn load_seed_or_default(seed_file_path: &str) -> PageSeed {
    let path = Path::new(seed_file_path);

    if !path.exists() {
        tracing::warn!("种子文件 {} 不存在，使用默认页面数据", seed_file_path);
        return PageSeed::default();
    }

    match load_seed_file(path).await {
        Ok(seed) => {
            tracing::info!(
                "成功加载种子文件: {} 个初始文档",
                if seed.documents.is_empty() {
                    1
                } else {
                    seed.documents.split(';').count()
                }
            );
            seed
        }
        Err(e) => {
            tracing::warn!("加载种子文件失败 {}: {}", seed_file_path, e);
            PageSeed::default()
        }
    }
}
