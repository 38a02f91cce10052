//! Memory Layer - In-Memory State Management
//!
//! 实现分享故事的内存存储

mod story_store;

pub use story_store::InMemoryStoryStore;
