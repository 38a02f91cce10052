//! Ask Command Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::commands::AskQuestion;
use crate::application::error::ApplicationError;
use crate::application::ports::ImageProviderPort;
use crate::domain::answer_question;

/// 问答结果
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub image_url: String,
}

/// AskQuestion Handler - 固定回答 + 配图
pub struct AskQuestionHandler {
    images: Arc<dyn ImageProviderPort>,
    default_genre: String,
}

impl AskQuestionHandler {
    pub fn new(images: Arc<dyn ImageProviderPort>, default_genre: impl Into<String>) -> Self {
        Self {
            images,
            default_genre: default_genre.into(),
        }
    }

    pub async fn handle(&self, command: AskQuestion) -> Result<AskResponse, ApplicationError> {
        if command.question.is_empty() {
            return Err(ApplicationError::validation("Question is required"));
        }

        let canned = answer_question(&command.question);
        let image_url = self
            .images
            .illustrate(&canned.image_prompt, Some(&self.default_genre))
            .await?;

        tracing::debug!(image_prompt = %canned.image_prompt, "Question answered");

        Ok(AskResponse {
            answer: canned.answer,
            image_url,
        })
    }
}
