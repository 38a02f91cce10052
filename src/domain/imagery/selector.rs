//! Image Selector - 按提示词从图库挑图
//!
//! 优先级：提示词关键词 > 题材 > default，然后在分类内均匀随机取一张。
//! 永不失败，最差情况退回 default 分类。

use rand::seq::SliceRandom;
use rand::Rng;

use super::collections::{collection, FALLBACK_IMAGE_URL};
use super::ImageCategory;

/// 选图结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    pub category: ImageCategory,
    pub url: &'static str,
}

/// 图库选图器
#[derive(Debug, Clone, Default)]
pub struct ImageSelector;

impl ImageSelector {
    pub fn new() -> Self {
        Self
    }

    /// 为提示词挑选一张图片
    pub fn select(&self, prompt: &str, genre: Option<&str>) -> ImageSelection {
        self.select_with_rng(prompt, genre, &mut rand::thread_rng())
    }

    pub fn select_with_rng<R: Rng + ?Sized>(
        &self,
        prompt: &str,
        genre: Option<&str>,
        rng: &mut R,
    ) -> ImageSelection {
        let category = ImageCategory::resolve(prompt, genre);

        match shuffle_and_pick(collection(category), rng) {
            Some(url) => ImageSelection { category, url },
            None => {
                tracing::warn!(category = %category, "Empty image collection, using default");
                ImageSelection {
                    category: ImageCategory::Default,
                    url: shuffle_and_pick(collection(ImageCategory::Default), rng)
                        .unwrap_or(FALLBACK_IMAGE_URL),
                }
            }
        }
    }
}

fn shuffle_and_pick<R: Rng + ?Sized>(urls: &[&'static str], rng: &mut R) -> Option<&'static str> {
    let mut candidates = urls.to_vec();
    candidates.shuffle(rng);
    candidates.choose(rng).copied()
}
