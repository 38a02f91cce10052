//! Scene Text Rewriter - 场景文本"润色"
//!
//! 不调用任何模型，只做固定的格式化和词语替换

/// 少于等于该词数的文本原样返回
const MIN_WORDS_TO_REWRITE: usize = 10;

/// 固定替换表（检测时忽略大小写，替换时区分大小写）
const REPLACEMENTS: &[(&str, &str)] = &[
    ("robot", "mechanical being"),
    ("door", "mysterious portal"),
];

/// 重写场景文本
///
/// 超过 10 个词时在每个 `.` 和 `!` 后插入换行，再应用替换表
pub fn rewrite_scene_text(text: &str) -> String {
    if text.split_whitespace().count() <= MIN_WORDS_TO_REWRITE {
        return text.to_string();
    }

    let mut rewritten = text.replace('.', ".\n").replace('!', "!\n");
    let lowered = text.to_lowercase();
    for (word, replacement) in REPLACEMENTS {
        if lowered.contains(word) {
            rewritten = rewritten.replace(word, replacement);
        }
    }
    rewritten
}
