//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod image_fetcher;
mod image_provider;
mod image_storage;
mod pdf_renderer;
mod story_store;

pub use image_fetcher::{FetchError, ImageFetcherPort};
pub use image_provider::{ImageError, ImageProviderPort};
pub use image_storage::{
    local_file_name, ImageStorageError, ImageStoragePort, StoredImage, STATIC_URL_PREFIX,
};
pub use pdf_renderer::{PdfError, PdfRendererPort};
pub use story_store::{SharedStory, StoreError, StoryStorePort};
