//! Story Command Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::commands::{GenerateStory, RegenerateScene};
use crate::application::error::ApplicationError;
use crate::application::ports::ImageProviderPort;
use crate::domain::story::{
    compose_story, rewrite_scene_text, RegenerateMode, Scene, Story, StoryIdea, StoryStyle,
    StoryTemplate,
};

// ============================================================================
// GenerateStory
// ============================================================================

/// GenerateStory Handler - 模板生成故事并逐个场景配图
///
/// 配图统一使用配置的 `default_genre`，与故事自身题材无关
pub struct GenerateStoryHandler {
    images: Arc<dyn ImageProviderPort>,
    template: StoryTemplate,
    default_genre: String,
}

impl GenerateStoryHandler {
    pub fn new(
        images: Arc<dyn ImageProviderPort>,
        template: StoryTemplate,
        default_genre: impl Into<String>,
    ) -> Self {
        Self {
            images,
            template,
            default_genre: default_genre.into(),
        }
    }

    pub async fn handle(&self, command: GenerateStory) -> Result<Story, ApplicationError> {
        let idea = StoryIdea::new(&command.idea)?;
        let style = StoryStyle::from_parts(
            command.genre,
            command.tone,
            command.audience,
            command.art_style,
        );

        let mut story = compose_story(self.template, &idea, &style);
        if story.scenes.is_empty() {
            return Err(ApplicationError::internal(
                "Failed to generate a valid story structure",
            ));
        }

        // 按顺序配图，失败的场景保持 image_url = None
        for scene in story.scenes.iter_mut() {
            scene.image_url = self.illustrate_scene(scene, &style).await;
        }

        tracing::info!(
            title = %story.title,
            template = ?self.template,
            scenes = story.scene_count(),
            illustrated = story.scenes.iter().filter(|s| s.image_url.is_some()).count(),
            "Story generated"
        );

        Ok(story)
    }

    /// 首次失败后用简化提示词重试一次
    async fn illustrate_scene(&self, scene: &Scene, style: &StoryStyle) -> Option<String> {
        let genre = Some(self.default_genre.as_str());

        match self.images.illustrate(&scene.image_prompt, genre).await {
            Ok(url) => return Some(url),
            Err(e) => {
                tracing::warn!(
                    scene_number = scene.scene_number,
                    error = %e,
                    "Scene illustration failed, retrying with simplified prompt"
                );
            }
        }

        let simplified = format!(
            "Create a {} style image of: {}",
            style.art_style, scene.title
        );
        match self.images.illustrate(&simplified, genre).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::error!(
                    scene_number = scene.scene_number,
                    error = %e,
                    "Scene illustration retry failed"
                );
                None
            }
        }
    }
}

// ============================================================================
// RegenerateScene
// ============================================================================

/// 场景重新生成结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegeneratedScene {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_image_url: Option<String>,
}

impl RegeneratedScene {
    pub fn is_empty(&self) -> bool {
        self.new_text.is_none() && self.new_image_url.is_none()
    }
}

/// RegenerateScene Handler
pub struct RegenerateSceneHandler {
    images: Arc<dyn ImageProviderPort>,
    default_genre: String,
}

impl RegenerateSceneHandler {
    pub fn new(images: Arc<dyn ImageProviderPort>, default_genre: impl Into<String>) -> Self {
        Self {
            images,
            default_genre: default_genre.into(),
        }
    }

    pub async fn handle(&self, command: RegenerateScene) -> Result<RegeneratedScene, ApplicationError> {
        let mut result = RegeneratedScene::default();

        // 未知模式不做任何修改
        if let Ok(mode) = command.mode.parse::<RegenerateMode>() {
            if mode.includes_text() {
                result.new_text = Some(rewrite_scene_text(&command.scene_text));
            }

            if mode.includes_image() {
                let genre = Some(self.default_genre.as_str());
                let url = match self.images.illustrate(&command.image_prompt, genre).await {
                    Ok(url) => url,
                    Err(e) => {
                        tracing::warn!(error = %e, "Regeneration illustration failed, using stock image");
                        self.images.stock_url(&command.image_prompt, genre)
                    }
                };
                result.new_image_url = Some(url);
            }
        }

        if result.is_empty() {
            return Err(ApplicationError::validation("No changes were made"));
        }

        tracing::debug!(
            mode = %command.mode,
            art_style = %command.art_style,
            text = result.new_text.is_some(),
            image = result.new_image_url.is_some(),
            "Scene regenerated"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{FakeImageProvider, STOCK_URL};

    fn generate(idea: &str) -> GenerateStory {
        GenerateStory {
            idea: idea.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generate_story_illustrates_every_scene() {
        let images = Arc::new(FakeImageProvider::new());
        let handler = GenerateStoryHandler::new(images.clone(), StoryTemplate::Primary, "fantasy");

        let story = handler.handle(generate("a lost key")).await.unwrap();

        assert_eq!(story.scene_count(), 5);
        assert_eq!(story.scenes[0].title, "The Beginning");
        assert!(story.scenes[0].text.contains("a lost key"));
        for (i, scene) in story.scenes.iter().enumerate() {
            assert_eq!(scene.scene_number as usize, i + 1);
            assert!(scene.image_url.is_some());
        }

        let calls = images.calls();
        assert_eq!(calls.len(), 5);
    }

    #[tokio::test]
    async fn test_generate_story_illustrates_with_default_genre() {
        let images = Arc::new(FakeImageProvider::new());
        let handler = GenerateStoryHandler::new(images.clone(), StoryTemplate::Primary, "fantasy");

        let command = GenerateStory {
            idea: "a teapot".to_string(),
            genre: Some("horror".to_string()),
            ..Default::default()
        };
        let story = handler.handle(command).await.unwrap();

        assert_eq!(story.genre, "horror");
        let calls = images.calls();
        assert_eq!(calls.len(), 5);
        assert!(calls.iter().all(|(_, genre)| genre.as_deref() == Some("fantasy")));
    }

    #[tokio::test]
    async fn test_generate_story_rejects_blank_idea() {
        let handler = GenerateStoryHandler::new(Arc::new(FakeImageProvider::new()), StoryTemplate::Primary, "fantasy");
        let result = handler.handle(generate("   ")).await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(msg)) if msg == "Story idea is required"));
    }

    #[tokio::test]
    async fn test_generate_story_retries_with_simplified_prompt() {
        // 只拒绝第二幕的原始提示词
        let images = Arc::new(FakeImageProvider::failing_on(&["discovery moment"]));
        let handler = GenerateStoryHandler::new(images.clone(), StoryTemplate::Primary, "fantasy");

        let story = handler.handle(generate("a comet")).await.unwrap();

        assert!(story.scenes[1].image_url.is_some());
        let prompts: Vec<String> = images.calls().into_iter().map(|(p, _)| p).collect();
        assert_eq!(prompts.len(), 6);
        assert_eq!(prompts[2], "Create a realistic style image of: The Discovery");
    }

    #[tokio::test]
    async fn test_generate_story_leaves_url_empty_after_second_failure() {
        let images = Arc::new(FakeImageProvider::failing_on(&["challenge", "The Challenge"]));
        let handler = GenerateStoryHandler::new(images, StoryTemplate::Primary, "fantasy");

        let story = handler.handle(generate("a storm")).await.unwrap();

        assert_eq!(story.scenes[2].image_url, None);
        assert!(story.scenes[3].image_url.is_some());
    }

    #[tokio::test]
    async fn test_generate_story_with_fallback_template() {
        let handler = GenerateStoryHandler::new(Arc::new(FakeImageProvider::new()), StoryTemplate::Fallback, "fantasy");
        let story = handler.handle(generate("a dragon")).await.unwrap();
        assert_eq!(story.scene_count(), 3);
    }

    fn regenerate(mode: &str) -> RegenerateScene {
        RegenerateScene {
            scene_text: "The robot opened the door slowly. Light poured into the hall beyond it!".to_string(),
            image_prompt: "A robot at a door".to_string(),
            art_style: "realistic".to_string(),
            mode: mode.to_string(),
        }
    }

    #[tokio::test]
    async fn test_regenerate_text_only() {
        let handler = RegenerateSceneHandler::new(Arc::new(FakeImageProvider::new()), "fantasy");
        let result = handler.handle(regenerate("text")).await.unwrap();

        let text = result.new_text.unwrap();
        assert!(text.contains("mechanical being"));
        assert!(text.contains("mysterious portal"));
        assert_eq!(result.new_image_url, None);
    }

    #[tokio::test]
    async fn test_regenerate_both() {
        let handler = RegenerateSceneHandler::new(Arc::new(FakeImageProvider::new()), "fantasy");
        let result = handler.handle(regenerate("both")).await.unwrap();
        assert!(result.new_text.is_some());
        assert!(result.new_image_url.is_some());
    }

    #[tokio::test]
    async fn test_regenerate_image_falls_back_to_stock() {
        let handler =
            RegenerateSceneHandler::new(Arc::new(FakeImageProvider::failing_on(&["robot"])), "fantasy");
        let result = handler.handle(regenerate("image")).await.unwrap();
        assert_eq!(result.new_image_url.as_deref(), Some(STOCK_URL));
    }

    #[tokio::test]
    async fn test_regenerate_unknown_mode_makes_no_changes() {
        let handler = RegenerateSceneHandler::new(Arc::new(FakeImageProvider::new()), "fantasy");
        let result = handler.handle(regenerate("audio")).await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(msg)) if msg == "No changes were made"));
    }
}
