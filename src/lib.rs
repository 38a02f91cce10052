//! Storyteller - 图文故事生成服务（演示模式）
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 故事模板、场景重写
//! - Imagery Context: 关键词选图
//! - Answers: 固定问答
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ImageProvider, ImageFetcher, ImageStorage, PdfRenderer, StoryStore）
//! - Commands: 生成、重写、导出、问答、分享
//! - Queries: 查看分享的故事
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API + 静态图片
//! - Memory: 分享故事的内存存储
//! - Adapters: 图库配图、图片下载、本地缓存、PDF 渲染

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
