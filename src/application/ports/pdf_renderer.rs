//! PDF Renderer Port - 故事导出 PDF
//!
//! 渲染是纯 CPU 操作，调用方负责放到阻塞线程执行

use thiserror::Error;

use crate::domain::story::Story;

/// PDF 渲染错误
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to encode page content: {0}")]
    ContentError(String),

    #[error("Failed to write document: {0}")]
    WriteError(String),
}

/// PDF Renderer Port
pub trait PdfRendererPort: Send + Sync {
    /// 渲染故事
    ///
    /// `illustrations` 与 `story.scenes` 按下标对应，`None` 表示该场景无图。
    /// 图片解码失败只记录日志并跳过该图。
    fn render(&self, story: &Story, illustrations: &[Option<Vec<u8>>]) -> Result<Vec<u8>, PdfError>;
}
