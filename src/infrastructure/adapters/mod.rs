//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod images;
pub mod pdf;
pub mod storage;

pub use images::*;
pub use pdf::*;
pub use storage::*;
