//! Share Command Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::commands::ShareStory;
use crate::application::error::ApplicationError;
use crate::application::ports::{SharedStory, StoryStorePort};

/// 分享结果
#[derive(Debug, Clone, Serialize)]
pub struct ShareStoryResponse {
    pub share_url: String,
    pub story_id: String,
}

/// ShareStory Handler - 保存快照并生成分享链接
pub struct ShareStoryHandler {
    store: Arc<dyn StoryStorePort>,
}

impl ShareStoryHandler {
    pub fn new(store: Arc<dyn StoryStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: ShareStory) -> Result<ShareStoryResponse, ApplicationError> {
        let shared = SharedStory::new(command.story);
        let title = shared.story.title.clone();
        let story_id = self.store.put(shared)?;

        let base_url = command.base_url.trim_end_matches('/');
        let share_url = format!("{}/story/{}", base_url, story_id);

        tracing::info!(story_id = %story_id, title = %title, "Story shared");

        Ok(ShareStoryResponse {
            share_url,
            story_id: story_id.to_string(),
        })
    }
}
