//! Image Storage Port - 本地图片缓存
//!
//! 下载的图库图片以 `<uuid>.jpg` 保存在静态目录，通过 `/static/<uuid>.jpg` 对外提供。
//! 不做任何清理。

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 静态文件对外路径前缀
pub const STATIC_URL_PREFIX: &str = "/static/";

/// 图片存储错误
#[derive(Debug, Error)]
pub enum ImageStorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 已保存的图片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub file_name: String,
    pub path: PathBuf,
}

impl StoredImage {
    /// 对外 URL（`/static/<file_name>`）
    pub fn public_url(&self) -> String {
        format!("{}{}", STATIC_URL_PREFIX, self.file_name)
    }
}

/// 从 `/static/<name>` 形式的 URL 中取出文件名
pub fn local_file_name(url: &str) -> Option<&str> {
    url.strip_prefix(STATIC_URL_PREFIX)
        .filter(|name| !name.is_empty() && !name.contains('/') && !name.starts_with('.'))
}

/// Image Storage Port
#[async_trait]
pub trait ImageStoragePort: Send + Sync {
    /// 保存图片，返回生成的文件名与路径
    async fn save(&self, data: &[u8]) -> Result<StoredImage, ImageStorageError>;

    /// 读取已保存的图片
    async fn read(&self, file_name: &str) -> Result<Vec<u8>, ImageStorageError>;
}
