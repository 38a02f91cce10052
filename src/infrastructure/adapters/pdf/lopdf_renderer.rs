//! Lopdf Renderer - 故事导出 PDF
//!
//! 实现 PdfRendererPort trait：
//! - US Letter 纸张，四周 72pt 边距
//! - 第一页为封面（标题、题材、署名），之后每个场景另起一页
//! - 配图统一转为 RGB JPEG，以 DCTDecode 图像 XObject 嵌入
//! - 内容超出页面时自动换页

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::layout::{
    encode_win_ansi, text_width, wrap_text, Align, Font, TextStyle, META_STYLE,
    SCENE_TEXT_STYLE, SCENE_TITLE_STYLE, TITLE_STYLE,
};
use crate::application::ports::{PdfError, PdfRendererPort};
use crate::domain::story::Story;

/// 页面几何（pt）
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 72.0,
        }
    }
}

impl PageGeometry {
    fn frame_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    fn frame_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    fn top(&self) -> f32 {
        self.height - self.margin
    }
}

/// 配图显示宽度
const IMAGE_WIDTH: f32 = 400.0;
/// 配图上下留白
const IMAGE_SPACING: f32 = 20.0;
const JPEG_QUALITY: u8 = 85;

/// lopdf PDF 渲染器
#[derive(Debug, Clone, Default)]
pub struct LopdfRenderer {
    geometry: PageGeometry,
}

impl PdfRendererPort for LopdfRenderer {
    fn render(&self, story: &Story, illustrations: &[Option<Vec<u8>>]) -> Result<Vec<u8>, PdfError> {
        let mut composer = Composer::new(self.geometry);

        composer.paragraph(&story.title, &TITLE_STYLE);
        composer.spacer(40.0);
        if let Some(genre) = story.display_genre() {
            composer.paragraph(&format!("Genre: {}", genre), &META_STYLE);
            composer.spacer(10.0);
        }
        composer.paragraph("Generated with AI Storyteller", &META_STYLE);
        composer.spacer(60.0);

        for (index, scene) in story.scenes.iter().enumerate() {
            composer.page_break();
            composer.paragraph(&scene.header(), &SCENE_TITLE_STYLE);
            for paragraph in scene.paragraphs() {
                composer.paragraph(paragraph, &SCENE_TEXT_STYLE);
            }

            let Some(Some(bytes)) = illustrations.get(index) else {
                continue;
            };
            match JpegImage::from_bytes(bytes) {
                Ok(jpeg) => {
                    composer.spacer(IMAGE_SPACING);
                    composer.image(jpeg, IMAGE_WIDTH);
                    composer.spacer(IMAGE_SPACING);
                }
                Err(e) => {
                    tracing::warn!(
                        scene_number = scene.scene_number,
                        error = %e,
                        "Error adding image to PDF"
                    );
                }
            }
        }

        composer.finish()
    }
}

/// 重新编码后的 JPEG 图片
struct JpegImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl JpegImage {
    /// 任意格式解码后转为 RGB8 JPEG
    fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let rgb = image::load_from_memory(bytes)?.to_rgb8();
        let (width, height) = rgb.dimensions();

        let mut data = Vec::new();
        JpegEncoder::new_with_quality(Cursor::new(&mut data), JPEG_QUALITY).encode_image(&rgb)?;

        Ok(Self { width, height, data })
    }
}

/// 单页内容
#[derive(Default)]
struct PageContent {
    operations: Vec<Operation>,
    images: Vec<(String, ObjectId)>,
}

impl PageContent {
    fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// 流式排版器
///
/// `cursor` 为当前可写区域顶部的 y 坐标（PDF 坐标系，原点在左下角）
struct Composer {
    doc: Document,
    pages_id: ObjectId,
    fonts: Vec<(Font, ObjectId)>,
    geometry: PageGeometry,
    pages: Vec<PageContent>,
    cursor: f32,
    image_count: usize,
}

impl Composer {
    fn new(geometry: PageGeometry) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let fonts = Font::ALL
            .iter()
            .map(|font| {
                let id = doc.add_object(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.base_font(),
                    "Encoding" => "WinAnsiEncoding",
                });
                (*font, id)
            })
            .collect();

        Self {
            doc,
            pages_id,
            fonts,
            geometry,
            pages: vec![PageContent::default()],
            cursor: geometry.top(),
            image_count: 0,
        }
    }

    fn current_page(&mut self) -> &mut PageContent {
        if self.pages.is_empty() {
            self.pages.push(PageContent::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn at_page_top(&self) -> bool {
        self.pages.last().map_or(true, PageContent::is_empty)
    }

    fn available(&self) -> f32 {
        self.cursor - self.geometry.margin
    }

    fn new_page(&mut self) {
        self.pages.push(PageContent::default());
        self.cursor = self.geometry.top();
    }

    /// 强制换页；当前页为空时不产生空白页
    fn page_break(&mut self) {
        if !self.at_page_top() {
            self.new_page();
        }
    }

    /// 确保剩余空间放得下 `height`，否则换页
    fn ensure_space(&mut self, height: f32) {
        if height > self.available() && !self.at_page_top() {
            self.new_page();
        }
    }

    /// 垂直留白；页顶的留白被忽略
    fn spacer(&mut self, height: f32) {
        if self.at_page_top() {
            return;
        }
        self.cursor -= height.min(self.available());
    }

    fn paragraph(&mut self, text: &str, style: &TextStyle) {
        let lines = wrap_text(text, style.font, style.size, self.geometry.frame_width());
        if lines.is_empty() {
            return;
        }

        if !self.at_page_top() {
            self.spacer(style.space_before);
        }

        for line in lines {
            self.ensure_space(style.leading);
            self.draw_line(&line, style);
            self.cursor -= style.leading;
        }

        self.cursor -= style.space_after.min(self.available().max(0.0));
    }

    fn draw_line(&mut self, line: &str, style: &TextStyle) {
        let x = match style.align {
            Align::Left => self.geometry.margin,
            Align::Center => {
                let width = text_width(line, style.font, style.size);
                self.geometry.margin + ((self.geometry.frame_width() - width) / 2.0).max(0.0)
            }
        };
        let baseline = self.cursor - style.size;
        let color = style.color;

        self.current_page().operations.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(style.font.resource_name().as_bytes().to_vec()), style.size.into()],
            ),
            Operation::new("rg", vec![color.0.into(), color.1.into(), color.2.into()]),
            Operation::new("Td", vec![x.into(), baseline.into()]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(line), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    /// 按宽度等比缩放放置图片，超出版心时整体缩小
    fn image(&mut self, jpeg: JpegImage, width: f32) {
        let aspect = jpeg.height as f32 / jpeg.width.max(1) as f32;
        let mut draw_width = width.min(self.geometry.frame_width());
        let mut draw_height = draw_width * aspect;
        if draw_height > self.geometry.frame_height() {
            draw_height = self.geometry.frame_height();
            draw_width = draw_height / aspect;
        }

        self.ensure_space(draw_height);

        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => jpeg.width as i64,
                "Height" => jpeg.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            jpeg.data,
        );
        let image_id = self.doc.add_object(stream);
        self.image_count += 1;
        let name = format!("Im{}", self.image_count);

        let x = self.geometry.margin + (self.geometry.frame_width() - draw_width) / 2.0;
        let y = self.cursor - draw_height;

        let page = self.current_page();
        page.operations.extend([
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    draw_width.into(),
                    0.into(),
                    0.into(),
                    draw_height.into(),
                    x.into(),
                    y.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ]);
        page.images.push((name, image_id));

        self.cursor -= draw_height;
    }

    fn finish(mut self) -> Result<Vec<u8>, PdfError> {
        let mut font_dict = lopdf::Dictionary::new();
        for (font, id) in &self.fonts {
            font_dict.set(font.resource_name(), *id);
        }

        let pages = std::mem::take(&mut self.pages);
        let mut kids = Vec::with_capacity(pages.len());
        for page in pages {
            let content = Content {
                operations: page.operations,
            };
            let encoded = content
                .encode()
                .map_err(|e| PdfError::ContentError(e.to_string()))?;
            let content_id = self.doc.add_object(Stream::new(dictionary! {}, encoded));

            let mut xobjects = lopdf::Dictionary::new();
            for (name, id) in page.images {
                xobjects.set(name, id);
            }

            let page_id = self.doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => self.pages_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    self.geometry.width.into(),
                    self.geometry.height.into(),
                ],
                "Contents" => content_id,
                "Resources" => dictionary! {
                    "Font" => font_dict.clone(),
                    "XObject" => xobjects,
                },
            });
            kids.push(Object::from(page_id));
        }

        let count = kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        self.doc
            .save_to(&mut buffer)
            .map_err(|e| PdfError::WriteError(e.to_string()))?;
        Ok(buffer)
    }
}
