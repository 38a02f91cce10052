//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{
    // Command handlers
    AskQuestionHandler, ExportStoryPdfHandler, GenerateStoryHandler, RegenerateSceneHandler,
    ShareStoryHandler,
    // Query handlers
    GetSharedStoryHandler,
    // Ports
    ImageFetcherPort, ImageProviderPort, ImageStoragePort, PdfRendererPort, StoryStorePort,
};
use crate::domain::story::{StoryTemplate, DEFAULT_GENRE};

/// 状态选项（来自配置）
#[derive(Debug, Clone)]
pub struct StateOptions {
    /// 故事模板
    pub template: StoryTemplate,
    /// 重新配图 / 问答使用的题材
    pub default_genre: String,
    /// 配置的分享链接 Base URL
    pub public_base_url: Option<String>,
    /// 无 Host 头时使用的 Base URL
    pub listen_base_url: String,
    /// 静态图片目录
    pub static_dir: PathBuf,
}

impl Default for StateOptions {
    fn default() -> Self {
        Self {
            template: StoryTemplate::default(),
            default_genre: DEFAULT_GENRE.to_string(),
            public_base_url: None,
            listen_base_url: "http://localhost:5000".to_string(),
            static_dir: PathBuf::from("static"),
        }
    }
}

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub generate_story_handler: GenerateStoryHandler,
    pub regenerate_scene_handler: RegenerateSceneHandler,
    pub export_pdf_handler: ExportStoryPdfHandler,
    pub ask_question_handler: AskQuestionHandler,
    pub share_story_handler: ShareStoryHandler,

    // ========== Query Handlers ==========
    pub get_shared_story_handler: GetSharedStoryHandler,

    // ========== Options ==========
    pub public_base_url: Option<String>,
    pub listen_base_url: String,
    pub static_dir: PathBuf,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        images: Arc<dyn ImageProviderPort>,
        fetcher: Arc<dyn ImageFetcherPort>,
        image_storage: Arc<dyn ImageStoragePort>,
        renderer: Arc<dyn PdfRendererPort>,
        story_store: Arc<dyn StoryStorePort>,
        options: StateOptions,
    ) -> Self {
        Self {
            // Command handlers
            generate_story_handler: GenerateStoryHandler::new(
                images.clone(),
                options.template,
                options.default_genre.clone(),
            ),
            regenerate_scene_handler: RegenerateSceneHandler::new(
                images.clone(),
                options.default_genre.clone(),
            ),
            export_pdf_handler: ExportStoryPdfHandler::new(renderer, fetcher, image_storage),
            ask_question_handler: AskQuestionHandler::new(images, options.default_genre),
            share_story_handler: ShareStoryHandler::new(story_store.clone()),

            // Query handlers
            get_shared_story_handler: GetSharedStoryHandler::new(story_store),

            // Options
            public_base_url: options.public_base_url,
            listen_base_url: options.listen_base_url,
            static_dir: options.static_dir,
        }
    }
}
