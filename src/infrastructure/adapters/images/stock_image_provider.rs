//! Stock Image Provider - 图库配图
//!
//! 实现 ImageProviderPort trait：
//! 1. 用 ImageSelector 从图库挑一张
//! 2. 下载并缓存到静态目录，返回 `/static/<uuid>.jpg`
//! 3. 下载或写盘失败时直接返回图库原始 URL

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::ports::{ImageError, ImageFetcherPort, ImageProviderPort, ImageStoragePort};
use crate::domain::imagery::ImageSelector;

/// 图库配图器
pub struct StockImageProvider {
    selector: ImageSelector,
    fetcher: Arc<dyn ImageFetcherPort>,
    storage: Arc<dyn ImageStoragePort>,
    /// 是否下载到本地缓存
    cache_locally: bool,
}

impl StockImageProvider {
    pub fn new(
        selector: ImageSelector,
        fetcher: Arc<dyn ImageFetcherPort>,
        storage: Arc<dyn ImageStoragePort>,
        cache_locally: bool,
    ) -> Self {
        Self {
            selector,
            fetcher,
            storage,
            cache_locally,
        }
    }
}

#[async_trait]
impl ImageProviderPort for StockImageProvider {
    async fn illustrate(&self, prompt: &str, genre: Option<&str>) -> Result<String, ImageError> {
        let selection = self.selector.select(prompt, genre);

        tracing::debug!(
            category = %selection.category,
            url = %selection.url,
            "Stock image selected"
        );

        if !self.cache_locally {
            return Ok(selection.url.to_string());
        }

        let data = match self.fetcher.fetch(selection.url).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(url = %selection.url, error = %e, "Failed to download image, using remote URL");
                return Ok(selection.url.to_string());
            }
        };

        match self.storage.save(&data).await {
            Ok(stored) => Ok(stored.public_url()),
            Err(e) => {
                tracing::warn!(url = %selection.url, error = %e, "Error saving image locally, using remote URL");
                Ok(selection.url.to_string())
            }
        }
    }

    fn stock_url(&self, prompt: &str, genre: Option<&str>) -> String {
        self.selector.select(prompt, genre).url.to_string()
    }
}
