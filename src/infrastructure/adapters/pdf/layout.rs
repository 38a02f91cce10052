//! PDF Layout - 样式、字宽与折行
//!
//! 只使用 PDF 标准 14 字体（Helvetica / Helvetica-Bold），不嵌入字体文件

/// 标准字体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    pub const ALL: [Font; 2] = [Font::Helvetica, Font::HelveticaBold];

    /// 页面资源中的字体名
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// RGB 颜色（0.0 - 1.0）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self(
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        )
    }
}

/// 段落样式
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub color: Rgb,
    pub align: Align,
}

/// 封面标题
pub const TITLE_STYLE: TextStyle = TextStyle {
    font: Font::HelveticaBold,
    size: 32.0,
    leading: 38.0,
    space_before: 0.0,
    space_after: 30.0,
    color: Rgb::from_hex(0x2C3E50),
    align: Align::Center,
};

/// 封面元信息（题材等）
pub const META_STYLE: TextStyle = TextStyle {
    font: Font::Helvetica,
    size: 14.0,
    leading: 17.0,
    space_before: 0.0,
    space_after: 0.0,
    color: Rgb::from_hex(0x7F8C8D),
    align: Align::Center,
};

/// 场景标题
pub const SCENE_TITLE_STYLE: TextStyle = TextStyle {
    font: Font::HelveticaBold,
    size: 24.0,
    leading: 29.0,
    space_before: 30.0,
    space_after: 20.0,
    color: Rgb::from_hex(0x34495E),
    align: Align::Left,
};

/// 场景正文
pub const SCENE_TEXT_STYLE: TextStyle = TextStyle {
    font: Font::Helvetica,
    size: 12.0,
    leading: 16.0,
    space_before: 12.0,
    space_after: 12.0,
    color: Rgb::from_hex(0x2C3E50),
    align: Align::Left,
};

/// Helvetica 字宽（1/1000 em），覆盖 ASCII 32..=126
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold 按常规字宽放大近似
const BOLD_FACTOR: f32 = 1.06;

fn glyph_width(c: char) -> u16 {
    let code = c as u32;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[(code - 32) as usize]
    } else {
        556
    }
}

/// 文本宽度（pt）
pub fn text_width(text: &str, font: Font, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(c) as u32).sum();
    let width = units as f32 * size / 1000.0;
    match font {
        Font::Helvetica => width,
        Font::HelveticaBold => width * BOLD_FACTOR,
    }
}

/// 贪心折行，换行符按空白处理；超长单词独占一行
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if text_width(&candidate, font, size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// 编码为 WinAnsiEncoding，无法表示的字符替换为 '?'
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        // "Hi" = 722 + 222
        let width = text_width("Hi", Font::Helvetica, 10.0);
        assert!((width - 9.44).abs() < 1e-3);
        assert!(text_width("Hi", Font::HelveticaBold, 10.0) > width);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "In a fantasy world, our story begins with a lost key. The atmosphere was filled with adventurous energy.";
        let lines = wrap_text(text, Font::Helvetica, 12.0, 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, Font::Helvetica, 12.0) <= 200.0);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_treats_newlines_as_spaces() {
        let lines = wrap_text("One.\n Two!\n", Font::Helvetica, 12.0, 500.0);
        assert_eq!(lines, vec!["One. Two!"]);
    }

    #[test]
    fn test_long_word_gets_own_line() {
        let lines = wrap_text("a supercalifragilistic b", Font::Helvetica, 12.0, 30.0);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Café — ok"), b"Caf\xe9 \x97 ok".to_vec());
        assert_eq!(encode_win_ansi("龍"), b"?".to_vec());
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(Rgb::from_hex(0xFF0000), Rgb(1.0, 0.0, 0.0));
    }
}
