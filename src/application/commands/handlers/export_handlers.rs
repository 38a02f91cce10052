//! Export Command Handlers

use std::sync::Arc;

use crate::application::commands::ExportStoryPdf;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    local_file_name, ImageFetcherPort, ImageStoragePort, PdfRendererPort,
};

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportedPdf {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// ExportStoryPdf Handler
///
/// 逐个场景取图（`/static/` 下的图读本地缓存，其余走网络），
/// 取图失败只跳过该图，然后在阻塞线程里渲染 PDF
pub struct ExportStoryPdfHandler {
    renderer: Arc<dyn PdfRendererPort>,
    fetcher: Arc<dyn ImageFetcherPort>,
    storage: Arc<dyn ImageStoragePort>,
}

impl ExportStoryPdfHandler {
    pub fn new(
        renderer: Arc<dyn PdfRendererPort>,
        fetcher: Arc<dyn ImageFetcherPort>,
        storage: Arc<dyn ImageStoragePort>,
    ) -> Self {
        Self {
            renderer,
            fetcher,
            storage,
        }
    }

    pub async fn handle(&self, command: ExportStoryPdf) -> Result<ExportedPdf, ApplicationError> {
        let story = command.story;

        let mut illustrations = Vec::with_capacity(story.scenes.len());
        for scene in &story.scenes {
            let data = match scene.image_url.as_deref() {
                Some(url) => self.load_image(scene.scene_number, url).await,
                None => None,
            };
            illustrations.push(data);
        }

        let file_name = story.pdf_file_name();
        let renderer = self.renderer.clone();
        let data = tokio::task::spawn_blocking(move || renderer.render(&story, &illustrations))
            .await
            .map_err(|e| ApplicationError::internal(format!("PDF render task failed: {}", e)))??;

        tracing::info!(file_name = %file_name, size = data.len(), "Story exported to PDF");

        Ok(ExportedPdf { file_name, data })
    }

    async fn load_image(&self, scene_number: u32, url: &str) -> Option<Vec<u8>> {
        let result = match local_file_name(url) {
            Some(name) => self.storage.read(name).await.map_err(|e| e.to_string()),
            None => self.fetcher.fetch(url).await.map_err(|e| e.to_string()),
        };

        match result {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(scene_number, url = %url, error = %e, "Error adding image to PDF");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{FakeImageFetcher, MemoryImageStorage, RecordingPdfRenderer};
    use crate::domain::story::{Scene, Story};

    fn scene(n: u32, url: Option<&str>) -> Scene {
        let mut scene = Scene::new(n, format!("Scene {}", n), "Text.", "prompt");
        scene.image_url = url.map(str::to_string);
        scene
    }

    #[tokio::test]
    async fn test_export_collects_local_and_remote_images() {
        let renderer = Arc::new(RecordingPdfRenderer::default());
        let fetcher = Arc::new(FakeImageFetcher::default().with_image("https://img.test/a.jpg", b"remote"));
        let storage = Arc::new(MemoryImageStorage::default());
        storage.insert("local.jpg", b"local");

        let handler = ExportStoryPdfHandler::new(renderer.clone(), fetcher, storage);
        let story = Story::new(
            "My Story",
            "fantasy",
            "",
            vec![
                scene(1, Some("https://img.test/a.jpg")),
                scene(2, Some("/static/local.jpg")),
                scene(3, Some("https://img.test/missing.jpg")),
                scene(4, None),
            ],
        );

        let exported = handler.handle(ExportStoryPdf { story }).await.unwrap();

        assert_eq!(exported.file_name, "My_Story.pdf");
        assert!(exported.data.starts_with(b"%PDF"));
        assert_eq!(
            renderer.received(),
            vec![Some(b"remote".to_vec()), Some(b"local".to_vec()), None, None]
        );
    }
}
