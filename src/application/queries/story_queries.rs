//! Story Queries

/// 获取分享故事查询
#[derive(Debug, Clone)]
pub struct GetSharedStory {
    pub story_id: String,
}
