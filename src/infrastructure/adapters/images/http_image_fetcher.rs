//! HTTP Image Fetcher - 下载远程图库图片
//!
//! 实现 ImageFetcherPort trait

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{FetchError, ImageFetcherPort};

/// HTTP 图片下载配置
#[derive(Debug, Clone)]
pub struct HttpImageFetcherConfig {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpImageFetcherConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl HttpImageFetcherConfig {
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 图片下载器
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(config: HttpImageFetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcherPort for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        tracing::debug!(url = %url, "Downloading image");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else if e.is_connect() {
                FetchError::NetworkError(format!("Cannot connect to image host: {}", e))
            } else {
                FetchError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| FetchError::NetworkError(format!("Failed to read image body: {}", e)))?
            .to_vec();

        tracing::debug!(url = %url, size = data.len(), "Image downloaded");

        Ok(data)
    }
}
