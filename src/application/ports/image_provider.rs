//! Image Provider Port - 场景配图
//!
//! 给定提示词返回可直接展示的图片 URL，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 配图错误
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image provider failed: {0}")]
    ProviderError(String),
}

/// Image Provider Port
#[async_trait]
pub trait ImageProviderPort: Send + Sync {
    /// 为提示词生成（挑选）配图，返回 URL
    async fn illustrate(&self, prompt: &str, genre: Option<&str>) -> Result<String, ImageError>;

    /// 不下载、不缓存，直接从图库挑一张
    fn stock_url(&self, prompt: &str, genre: Option<&str>) -> String;
}
