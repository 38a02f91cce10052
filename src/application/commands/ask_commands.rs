//! Ask Commands

/// 提问命令
#[derive(Debug, Clone)]
pub struct AskQuestion {
    pub question: String,
}
