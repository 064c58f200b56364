//! 터미널 한 줄 입력기.
//! TTY에서는 프리필 문자열을 커서로 편집할 수 있게 띄우고,
//! non-TTY/dumb 터미널에서는 빈 상태의 일반 라인 입력으로 대체한다.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::ResetColor;
use crossterm::terminal::{self, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 한 줄을 읽는다. 입력이 끝났으면(EOF, Ctrl-D/Ctrl-C) `None`.
/// `prompt`는 폭 계산용 원문, `painted_prompt`는 실제 출력할 문자열이다.
pub fn read_line(prompt: &str, painted_prompt: &str, prefill: Option<&str>) -> Result<Option<String>> {
    if !supports_interactive_input() {
        return read_line_fallback(painted_prompt);
    }

    match read_line_interactive(prompt, painted_prompt, prefill.unwrap_or("")) {
        Ok(v) => Ok(v),
        Err(_) => read_line_fallback(painted_prompt),
    }
}

fn supports_interactive_input() -> bool {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 편집을 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(painted_prompt: &str) -> Result<Option<String>> {
    // 프리필을 지원하지 않으므로 빈 입력에서 시작한다.
    print!("{painted_prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(trim_newline(line)))
}

fn read_line_interactive(prompt: &str, painted_prompt: &str, initial: &str) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter(&mut stdout)?;

    let mut input = initial.to_string();
    let mut cursor_chars = input.chars().count();

    loop {
        render_line(&mut stdout, prompt, painted_prompt, &input, cursor_chars)?;

        match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Enter => {
                        finish_line(&mut stdout)?;
                        return Ok(Some(input));
                    }
                    KeyCode::Backspace => {
                        if cursor_chars > 0 {
                            remove_char_at(&mut input, cursor_chars - 1);
                            cursor_chars -= 1;
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_chars < input.chars().count() {
                            remove_char_at(&mut input, cursor_chars);
                        }
                    }
                    KeyCode::Left => {
                        cursor_chars = cursor_chars.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        cursor_chars = (cursor_chars + 1).min(input.chars().count());
                    }
                    KeyCode::Home => {
                        cursor_chars = 0;
                    }
                    KeyCode::End => {
                        cursor_chars = input.chars().count();
                    }
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        // 프리필 값을 통째로 버리고 새로 입력할 때 쓴다.
                        let tail: String = input.chars().skip(cursor_chars).collect();
                        input = tail;
                        cursor_chars = 0;
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        if input.is_empty() {
                            finish_line(&mut stdout)?;
                            return Ok(None);
                        }
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        finish_line(&mut stdout)?;
                        return Ok(None);
                    }
                    KeyCode::Char(ch) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT)
                        {
                            insert_char_at(&mut input, cursor_chars, ch);
                            cursor_chars += 1;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

fn render_line(
    stdout: &mut io::Stdout,
    prompt: &str,
    painted_prompt: &str,
    input: &str,
    cursor_chars: usize,
) -> Result<()> {
    let (w, _) = terminal::size().unwrap_or((120, 40));
    let width = (w as usize).max(20);
    // 마지막 칸은 커서 자리로 남겨 자동 줄바꿈을 피한다.
    let available = width
        .saturating_sub(display_width(prompt))
        .saturating_sub(1);
    let shown = tail_with_ellipsis_display(input, available);

    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    write!(stdout, "{painted_prompt}{shown}")?;

    let col = input_cursor_col(prompt, input, cursor_chars, available);
    execute!(stdout, cursor::MoveToColumn(col as u16), cursor::Show)?;
    stdout.flush()?;
    Ok(())
}

fn finish_line(stdout: &mut io::Stdout) -> Result<()> {
    // raw mode에서는 개행만으로 줄 처음으로 돌아가지 않는다.
    write!(stdout, "\r\n")?;
    stdout.flush()?;
    Ok(())
}

fn input_cursor_col(prompt: &str, input: &str, cursor_chars: usize, available: usize) -> usize {
    let prompt_width = display_width(prompt);
    if display_width(input) <= available {
        let before_cursor: String = input.chars().take(cursor_chars).collect();
        return prompt_width + display_width(&before_cursor);
    }

    // 오버플로우 상태에서는 tail 표시 정책상 커서를 입력 끝쪽으로 정렬한다.
    prompt_width + display_width(&tail_with_ellipsis_display(input, available))
}

fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let text_width = display_width(text);
    if text_width <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut tail_rev = String::new();
    let mut used = 0usize;

    for ch in text.chars().rev() {
        let cw = char_display_width(ch);
        if used + cw > target {
            break;
        }
        tail_rev.push(ch);
        used += cw;
    }

    let tail: String = tail_rev.chars().rev().collect();
    format!("...{tail}")
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Show)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end && end <= input.len() {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove_respect_multibyte_chars() {
        let mut input = "café".to_string();
        insert_char_at(&mut input, 4, '!');
        assert_eq!(input, "café!");

        remove_char_at(&mut input, 3);
        assert_eq!(input, "caf!");

        insert_char_at(&mut input, 0, '¿');
        assert_eq!(input, "¿caf!");
    }

    #[test]
    fn tail_is_clipped_from_the_left() {
        assert_eq!(tail_with_ellipsis_display("Capital of France", 40), "Capital of France");
        assert_eq!(tail_with_ellipsis_display("Capital of France", 9), "...France");
        assert_eq!(tail_with_ellipsis_display("abc", 0), "");
        assert_eq!(tail_with_ellipsis_display("abcdef", 2), "..");
    }

    #[test]
    fn cursor_column_counts_wide_chars() {
        assert_eq!(input_cursor_col("> ", "정답", 1, 40), 4);
        assert_eq!(input_cursor_col("> ", "Rome", 4, 40), 6);
    }

    #[test]
    fn trim_newline_strips_crlf() {
        assert_eq!(trim_newline("Paris\r\n".to_string()), "Paris");
    }
}
