//! 로컬 터미널(stdin/stdout) 세션 어댑터.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::warn;

use crate::application::ports::{Session, Tone};
use crate::domain::error::{QuizError, QuizResult};
use crate::infrastructure::line_editor;
use crate::infrastructure::render::{banner_lines, paint};

/// stdout이 TTY일 때만 색상을 쓰는 콘솔 세션.
pub struct TerminalSession {
    interactive: bool,
    closed: bool,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
            closed: false,
        }
    }
}

#[async_trait]
impl Session for TerminalSession {
    fn paint(&self, text: &str, tone: Tone) -> String {
        paint(text, tone, self.interactive)
    }

    async fn emit_line(&mut self, text: &str, tone: Option<Tone>) {
        match tone {
            Some(tone) => println!("{}", self.paint(text, tone)),
            None => println!("{text}"),
        }
    }

    async fn emit_banner(&mut self, text: &str, tone: Tone) {
        for line in banner_lines(text) {
            println!("{}", self.paint(&line, tone));
        }
    }

    async fn emit_error(&mut self, text: &str) {
        let colored = io::stderr().is_terminal();
        eprintln!(
            "{}: {}",
            paint("error", Tone::Failure, colored),
            paint(text, Tone::Failure, colored)
        );
    }

    async fn prompt(&mut self, text: &str, prefill: Option<&str>) -> QuizResult<String> {
        if self.closed {
            return Err(QuizError::InputClosed);
        }

        let prompt = text.to_string();
        let painted = self.paint(text, Tone::Prompt);
        let prefill = prefill.map(ToString::to_string);
        let read = read_off_runtime(move || {
            line_editor::read_line(&prompt, &painted, prefill.as_deref())
        })
        .await;

        match read {
            Ok(Some(line)) => Ok(line.trim().to_string()),
            Ok(None) => {
                println!();
                self.closed = true;
                Err(QuizError::InputClosed)
            }
            Err(err) => {
                warn!(error = %err, "failed to read terminal input");
                self.closed = true;
                Err(QuizError::InputClosed)
            }
        }
    }

    async fn close(&mut self) {
        self.closed = true;
    }
}

/// 블로킹 터미널 읽기를 런타임 워커 밖(blocking pool)에서 실행한다.
async fn read_off_runtime<F>(read: F) -> Result<Option<String>>
where
    F: FnOnce() -> Result<Option<String>> + Send + 'static,
{
    tokio::task::spawn_blocking(read)
        .await
        .context("terminal input task failed")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blocking_read_result_is_passed_through() {
        let line = read_off_runtime(|| Ok(Some("Rome".to_string())))
            .await
            .unwrap();
        assert_eq!(line.as_deref(), Some("Rome"));

        assert_eq!(read_off_runtime(|| Ok(None)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn failed_blocking_read_becomes_an_error() {
        let err = read_off_runtime(|| Err(anyhow::anyhow!("stdin gone")))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "stdin gone");

        let err = read_off_runtime(|| panic!("editor crashed")).await.unwrap_err();
        assert_eq!(err.to_string(), "terminal input task failed");
    }
}
