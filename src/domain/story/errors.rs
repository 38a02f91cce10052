//! Story Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("Story idea is required")]
    MissingIdea,

    #[error("Invalid story data: {0}")]
    InvalidStory(String),

    #[error("Unknown regenerate mode: {0}")]
    UnknownRegenerateMode(String),
}
