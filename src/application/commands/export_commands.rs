//! Export Commands

use crate::domain::story::Story;

/// 导出 PDF 命令
#[derive(Debug, Clone)]
pub struct ExportStoryPdf {
    pub story: Story,
}
