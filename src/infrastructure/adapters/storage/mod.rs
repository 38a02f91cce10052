//! Storage Adapter - 本地图片缓存

mod file_image_storage;

pub use file_image_storage::FileImageStorage;
