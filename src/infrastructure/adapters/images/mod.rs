//! Images Adapter - 图库配图与图片下载

mod http_image_fetcher;
mod stock_image_provider;

pub use http_image_fetcher::{HttpImageFetcher, HttpImageFetcherConfig};
pub use stock_image_provider::StockImageProvider;
