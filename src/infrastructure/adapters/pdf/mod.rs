//! PDF 适配器
//!
//! 基于 lopdf 的故事导出实现

mod layout;
mod lopdf_renderer;

pub use lopdf_renderer::LopdfRenderer;
