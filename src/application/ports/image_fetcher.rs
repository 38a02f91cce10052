//! Image Fetcher Port - 远程图片下载

use async_trait::async_trait;
use thiserror::Error;

/// 下载错误
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Unexpected status {status} for {url}")]
    BadStatus { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Image Fetcher Port
#[async_trait]
pub trait ImageFetcherPort: Send + Sync {
    /// 下载图片原始字节
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
