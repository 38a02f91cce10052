//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ImageProvider、ImageFetcher、ImageStorage、PdfRenderer、StoryStore）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use commands::{
    AskQuestion,
    ExportStoryPdf,
    GenerateStory,
    RegenerateScene,
    ShareStory,
    // Handlers
    handlers::{
        AskQuestionHandler, AskResponse, ExportStoryPdfHandler, ExportedPdf, GenerateStoryHandler,
        RegenerateSceneHandler, RegeneratedScene, ShareStoryHandler, ShareStoryResponse,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Image fetcher
    FetchError,
    ImageFetcherPort,
    // Image provider
    ImageError,
    ImageProviderPort,
    // Image storage
    ImageStorageError,
    ImageStoragePort,
    StoredImage,
    // PDF renderer
    PdfError,
    PdfRendererPort,
    // Story store
    SharedStory,
    StoreError,
    StoryStorePort,
};

pub use queries::{handlers::GetSharedStoryHandler, GetSharedStory};
