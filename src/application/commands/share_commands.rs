//! Share Commands

use crate::domain::story::Story;

/// 分享故事命令
#[derive(Debug, Clone)]
pub struct ShareStory {
    pub story: Story,
    /// 分享链接的 Base URL（不带结尾斜杠）
    pub base_url: String,
}
