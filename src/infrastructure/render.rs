//! 콘솔/소켓 공용 텍스트 렌더링.

use unicode_width::UnicodeWidthStr;

use crate::application::ports::Tone;

/// 색상 분류를 ANSI SGR 코드로 바꾼다.
fn ansi_code(tone: Tone) -> &'static str {
    match tone {
        Tone::Accent => "1;35",
        Tone::Success => "1;32",
        Tone::Failure => "1;31",
        Tone::Highlight => "1;33",
        Tone::Prompt => "31",
    }
}

pub fn paint(text: &str, tone: Tone, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{}m{text}\x1b[0m", ansi_code(tone))
    } else {
        text.to_string()
    }
}

/// 글자 사이를 띄운 대문자 텍스트를 상자로 감싼 배너 줄을 만든다.
pub fn banner_lines(text: &str) -> Vec<String> {
    let spaced = text
        .trim()
        .chars()
        .flat_map(char::to_uppercase)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");
    let inner = UnicodeWidthStr::width(spaced.as_str()) + 4;
    let border = format!("+{}+", "-".repeat(inner));

    vec![border.clone(), format!("|  {spaced}  |"), border]
}
