//! Story Store Port - 分享故事存储
//!
//! 定义分享快照的存取接口，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::story::{Story, StoryId};

/// Story Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Story already shared: {0}")]
    AlreadyExists(StoryId),
}

/// 分享快照
#[derive(Debug, Clone)]
pub struct SharedStory {
    pub id: StoryId,
    pub story: Story,
    pub shared_at: DateTime<Utc>,
}

impl SharedStory {
    pub fn new(story: Story) -> Self {
        Self {
            id: StoryId::new(),
            story,
            shared_at: Utc::now(),
        }
    }
}

/// Story Store Port
///
/// 快照写入后不可修改，也没有过期时间
pub trait StoryStorePort: Send + Sync {
    /// 保存快照
    fn put(&self, shared: SharedStory) -> Result<StoryId, StoreError>;

    /// 读取快照
    fn get(&self, id: &StoryId) -> Option<SharedStory>;
}
