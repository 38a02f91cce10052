//! Imagery Context - 图库选图
//!
//! 用固定的 Unsplash 图库代替真实的图片生成

mod category;
mod collections;
mod selector;

pub use category::ImageCategory;
pub use collections::{collection, FALLBACK_IMAGE_URL};
pub use selector::{ImageSelection, ImageSelector};
