//! Storyteller - 图文故事生成服务
//!
//! 启动流程：加载配置 → 初始化日志 → 组装适配器 → 启动 HTTP 服务

use std::sync::Arc;

use storyteller::config::{load_config, print_config, AppConfig};
use storyteller::domain::imagery::ImageSelector;
use storyteller::infrastructure::adapters::{
    FileImageStorage, HttpImageFetcher, HttpImageFetcherConfig, LopdfRenderer, StockImageProvider,
};
use storyteller::infrastructure::http::{AppState, HttpServer, ServerConfig, StateOptions};
use storyteller::infrastructure::memory::InMemoryStoryStore;

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},storyteller={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Storyteller - AI Storyteller API (demo mode)");
    print_config(&config);

    // 本地图片缓存目录（同时作为 /static 根目录）
    let image_storage = Arc::new(FileImageStorage::new(&config.images.static_dir).await?);

    // 图片下载
    let fetcher_config =
        HttpImageFetcherConfig::default().with_timeout(config.images.fetch_timeout_secs);
    let fetcher = Arc::new(HttpImageFetcher::new(fetcher_config)?);

    // 图库配图
    let images = Arc::new(StockImageProvider::new(
        ImageSelector::new(),
        fetcher.clone(),
        image_storage.clone(),
        config.images.cache_locally,
    ));

    let story_store = Arc::new(InMemoryStoryStore::new());
    let renderer = Arc::new(LopdfRenderer::default());

    let options = StateOptions {
        template: config.story.template,
        default_genre: config.images.default_genre.clone(),
        public_base_url: config.server.base_url.clone(),
        listen_base_url: config.server.listen_base_url(),
        static_dir: config.images.static_dir.clone(),
    };
    let state = AppState::new(images, fetcher, image_storage, renderer, story_store, options);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => tracing::error!(error = %e, "Failed to listen for ctrl-c"),
            }
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
