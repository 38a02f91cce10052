//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::story::{StoryTemplate, DEFAULT_GENRE};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 配图配置
    #[serde(default)]
    pub images: ImagesConfig,

    /// 故事生成配置
    #[serde(default)]
    pub story: StoryConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 分享链接使用的 Base URL
    /// 未设置时取请求的 Host 头
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// 根据监听地址推导的 Base URL
    pub fn listen_base_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            &self.host
        };
        format!("http://{}:{}", host, self.port)
    }
}

/// 配图配置
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesConfig {
    /// 本地图片缓存目录（通过 /static 对外提供）
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// 是否把图库图片下载到本地
    #[serde(default = "default_cache_locally")]
    pub cache_locally: bool,

    /// 下载超时时间（秒）
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// 重新配图 / 问答使用的题材
    #[serde(default = "default_genre")]
    pub default_genre: String,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_cache_locally() -> bool {
    true
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_genre() -> String {
    DEFAULT_GENRE.to_string()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            cache_locally: default_cache_locally(),
            fetch_timeout_secs: default_fetch_timeout(),
            default_genre: default_genre(),
        }
    }
}

/// 故事生成配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryConfig {
    /// 模板：primary（五幕）或 fallback（三幕）
    #[serde(default)]
    pub template: StoryTemplate,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.images.static_dir, PathBuf::from("static"));
        assert!(config.images.cache_locally);
        assert_eq!(config.images.default_genre, "fantasy");
        assert_eq!(config.story.template, StoryTemplate::Primary);
    }

    #[test]
    fn test_listen_base_url() {
        let mut config = ServerConfig::default();
        assert_eq!(config.listen_base_url(), "http://localhost:5000");

        config.host = "127.0.0.1".into();
        config.port = 8080;
        assert_eq!(config.listen_base_url(), "http://127.0.0.1:8080");
    }
}
