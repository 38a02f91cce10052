//! 测试用的端口假实现

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::application::ports::{
    FetchError, ImageError, ImageFetcherPort, ImageProviderPort, ImageStorageError,
    ImageStoragePort, PdfError, PdfRendererPort, StoredImage,
};
use crate::domain::story::Story;

pub const STOCK_URL: &str = "https://stock.test/fallback.jpg";

/// 按提示词子串决定成功或失败的配图器
#[derive(Default)]
pub struct FakeImageProvider {
    failing: Vec<String>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl FakeImageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// 提示词包含任一子串时返回错误
    pub fn failing_on(patterns: &[&str]) -> Self {
        Self {
            failing: patterns.iter().map(|p| p.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProviderPort for FakeImageProvider {
    async fn illustrate(&self, prompt: &str, genre: Option<&str>) -> Result<String, ImageError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((prompt.to_string(), genre.map(str::to_string)));
        if self.failing.iter().any(|p| prompt.contains(p.as_str())) {
            return Err(ImageError::ProviderError(format!("refused: {}", prompt)));
        }
        Ok(format!("/static/fake-{}.jpg", calls.len()))
    }

    fn stock_url(&self, _prompt: &str, _genre: Option<&str>) -> String {
        STOCK_URL.to_string()
    }
}

/// 从内存表返回图片字节
#[derive(Default)]
pub struct FakeImageFetcher {
    images: HashMap<String, Vec<u8>>,
}

impl FakeImageFetcher {
    pub fn with_image(mut self, url: &str, data: &[u8]) -> Self {
        self.images.insert(url.to_string(), data.to_vec());
        self
    }
}

#[async_trait]
impl ImageFetcherPort for FakeImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.images
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::BadStatus {
                status: 404,
                url: url.to_string(),
            })
    }
}

/// 内存图片存储
#[derive(Default)]
pub struct MemoryImageStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryImageStorage {
    pub fn insert(&self, file_name: &str, data: &[u8]) {
        self.files
            .lock()
            .unwrap()
            .insert(file_name.to_string(), data.to_vec());
    }
}

#[async_trait]
impl ImageStoragePort for MemoryImageStorage {
    async fn save(&self, data: &[u8]) -> Result<StoredImage, ImageStorageError> {
        let file_name = format!("{}.jpg", uuid::Uuid::new_v4());
        self.insert(&file_name, data);
        Ok(StoredImage {
            path: PathBuf::from(&file_name),
            file_name,
        })
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, ImageStorageError> {
        self.files
            .lock()
            .unwrap()
            .get(file_name)
            .cloned()
            .ok_or_else(|| ImageStorageError::FileNotFound(file_name.to_string()))
    }
}

/// 记录收到的插图并返回固定字节
#[derive(Default)]
pub struct RecordingPdfRenderer {
    received: Mutex<Vec<Option<Vec<u8>>>>,
}

impl RecordingPdfRenderer {
    pub fn received(&self) -> Vec<Option<Vec<u8>>> {
        self.received.lock().unwrap().clone()
    }
}

impl PdfRendererPort for RecordingPdfRenderer {
    fn render(&self, _story: &Story, illustrations: &[Option<Vec<u8>>]) -> Result<Vec<u8>, PdfError> {
        *self.received.lock().unwrap() = illustrations.to_vec();
        Ok(b"%PDF-1.5 fake".to_vec())
    }
}
