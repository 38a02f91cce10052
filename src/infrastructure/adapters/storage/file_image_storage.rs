//! File Image Storage - 文件系统图片缓存
//!
//! 实现 ImageStoragePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{ImageStorageError, ImageStoragePort, StoredImage};

/// 文件系统图片存储
pub struct FileImageStorage {
    /// 静态文件目录
    base_dir: PathBuf,
}

impl FileImageStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, ImageStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| ImageStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    fn image_path(&self, file_name: &str) -> Result<PathBuf, ImageStorageError> {
        let is_plain = Path::new(file_name)
            .file_name()
            .map_or(false, |name| name == file_name);
        if !is_plain || file_name.starts_with('.') {
            return Err(ImageStorageError::InvalidFileName(file_name.to_string()));
        }
        Ok(self.base_dir.join(file_name))
    }
}

#[async_trait]
impl ImageStoragePort for FileImageStorage {
    async fn save(&self, data: &[u8]) -> Result<StoredImage, ImageStorageError> {
        let file_name = format!("{}.jpg", Uuid::new_v4());
        let path = self.base_dir.join(&file_name);

        fs::write(&path, data)
            .await
            .map_err(|e| ImageStorageError::IoError(e.to_string()))?;

        tracing::debug!(file_name = %file_name, size = data.len(), "Saved image");

        Ok(StoredImage { file_name, path })
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, ImageStorageError> {
        let path = self.image_path(file_name)?;

        if !path.exists() {
            return Err(ImageStorageError::FileNotFound(
                path.to_string_lossy().to_string(),
            ));
        }

        fs::read(&path)
            .await
            .map_err(|e| ImageStorageError::IoError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_read_image() {
        let temp_dir = tempdir().unwrap();
        let storage = FileImageStorage::new(temp_dir.path().join("static")).await.unwrap();

        let stored = storage.save(b"fake jpeg data").await.unwrap();
        assert!(stored.path.exists());
        assert!(stored.file_name.ends_with(".jpg"));
        assert!(stored.public_url().starts_with("/static/"));

        let data = storage.read(&stored.file_name).await.unwrap();
        assert_eq!(data, b"fake jpeg data");
    }

    #[tokio::test]
    async fn test_missing_and_invalid_names() {
        let temp_dir = tempdir().unwrap();
        let storage = FileImageStorage::new(temp_dir.path()).await.unwrap();

        assert!(matches!(
            storage.read("nope.jpg").await,
            Err(ImageStorageError::FileNotFound(_))
        ));
        assert!(matches!(
            storage.read("../secret.jpg").await,
            Err(ImageStorageError::InvalidFileName(_))
        ));
        assert!(matches!(
            storage.read("..").await,
            Err(ImageStorageError::InvalidFileName(_))
        ));
    }
}
