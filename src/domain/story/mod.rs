//! Story Context - 故事限界上下文
//!
//! 职责:
//! - 故事聚合与场景实体
//! - 固定叙事模板
//! - 场景文本重写

mod aggregate;
mod entities;
mod errors;
mod rewriter;
mod templates;
mod value_objects;

pub use aggregate::Story;
pub use entities::Scene;
pub use errors::StoryError;
pub use rewriter::rewrite_scene_text;
pub use templates::{compose_story, fallback_story, primary_story};
pub use value_objects::{
    RegenerateMode, StoryId, StoryIdea, StoryStyle, StoryTemplate, DEFAULT_ART_STYLE,
    DEFAULT_AUDIENCE, DEFAULT_GENRE, DEFAULT_TONE,
};
