//! Story Query Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::StoryStorePort;
use crate::application::queries::GetSharedStory;
use crate::domain::story::{Story, StoryId};

/// GetSharedStory Handler
pub struct GetSharedStoryHandler {
    store: Arc<dyn StoryStorePort>,
}

impl GetSharedStoryHandler {
    pub fn new(store: Arc<dyn StoryStorePort>) -> Self {
        Self { store }
    }

    /// 非法 ID 与不存在的 ID 一样按未找到处理
    pub async fn handle(&self, query: GetSharedStory) -> Result<Story, ApplicationError> {
        let not_found = || ApplicationError::not_found("Story", query.story_id.clone());

        let uuid = Uuid::parse_str(&query.story_id).map_err(|_| not_found())?;
        let shared = self
            .store
            .get(&StoryId::from_uuid(uuid))
            .ok_or_else(not_found)?;

        tracing::debug!(
            story_id = %shared.id,
            shared_at = %shared.shared_at,
            "Shared story viewed"
        );

        Ok(shared.story)
    }
}
