//! In-Memory Story Store Implementation

use dashmap::DashMap;

use crate::application::ports::{SharedStory, StoreError, StoryStorePort};
use crate::domain::story::StoryId;

/// 内存分享故事存储
///
/// 进程内有效，重启即丢失，不做过期清理
pub struct InMemoryStoryStore {
    stories: DashMap<StoryId, SharedStory>,
}

impl InMemoryStoryStore {
    pub fn new() -> Self {
        Self {
            stories: DashMap::new(),
        }
    }
}

impl Default for InMemoryStoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryStorePort for InMemoryStoryStore {
    fn put(&self, shared: SharedStory) -> Result<StoryId, StoreError> {
        let story_id = shared.id;
        match self.stories.entry(story_id) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(StoreError::AlreadyExists(story_id)),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(shared);
                tracing::debug!(story_id = %story_id, "Story snapshot stored");
                Ok(story_id)
            }
        }
    }

    fn get(&self, id: &StoryId) -> Option<SharedStory> {
        self.stories.get(id).map(|s| s.clone())
    }
}
