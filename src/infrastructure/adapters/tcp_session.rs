//! TCP 클라이언트 세션 어댑터.
//! 터미널 세션과 같은 명령 처리기를 소켓 입출력으로 구동한다.

use std::net::SocketAddr;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tracing::{debug, warn};

use crate::application::ports::{Session, Tone};
use crate::domain::error::{QuizError, QuizResult};
use crate::infrastructure::render::{banner_lines, paint};

/// 한 줄 입력의 최대 바이트 수(개행 제외). 넘기면 연결을 끊는다.
const MAX_LINE_BYTES: u64 = 4096;

/// 클라이언트 하나가 소유하는 세션. 색상은 항상 ANSI로 보내고 프리필은 지원하지 않는다.
pub struct TcpSession {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    peer: SocketAddr,
    closed: bool,
}

impl TcpSession {
    pub fn new(stream: TcpStream, peer: SocketAddr) -> Self {
        let (read_half, writer) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer,
            peer,
            closed: false,
        }
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    async fn write_raw(&mut self, text: &str) {
        if self.closed {
            return;
        }
        let result = async {
            self.writer.write_all(text.as_bytes()).await?;
            self.writer.flush().await
        }
        .await;

        if let Err(err) = result {
            // 끊긴 연결은 다음 prompt에서 EOF로 정리된다.
            debug!(peer = %self.peer, error = %err, "failed to write to client");
        }
    }
}

#[async_trait]
impl Session for TcpSession {
    fn paint(&self, text: &str, tone: Tone) -> String {
        paint(text, tone, true)
    }

    async fn emit_line(&mut self, text: &str, tone: Option<Tone>) {
        let line = match tone {
            Some(tone) => self.paint(text, tone),
            None => text.to_string(),
        };
        self.write_raw(&format!("{line}\n")).await;
    }

    async fn emit_banner(&mut self, text: &str, tone: Tone) {
        let mut out = String::new();
        for line in banner_lines(text) {
            out.push_str(&self.paint(&line, tone));
            out.push('\n');
        }
        self.write_raw(&out).await;
    }

    async fn emit_error(&mut self, text: &str) {
        let line = format!(
            "{}: {}\n",
            self.paint("error", Tone::Failure),
            self.paint(text, Tone::Failure)
        );
        self.write_raw(&line).await;
    }

    async fn prompt(&mut self, text: &str, _prefill: Option<&str>) -> QuizResult<String> {
        if self.closed {
            return Err(QuizError::InputClosed);
        }

        let painted = self.paint(text, Tone::Prompt);
        self.write_raw(&painted).await;

        let mut buf = Vec::new();
        let read = (&mut self.reader)
            .take(MAX_LINE_BYTES + 1)
            .read_until(b'\n', &mut buf)
            .await;
        match read {
            Ok(0) => {
                self.closed = true;
                Err(QuizError::InputClosed)
            }
            Ok(_) if !buf.ends_with(b"\n") && buf.len() as u64 > MAX_LINE_BYTES => {
                warn!(peer = %self.peer, limit = MAX_LINE_BYTES, "client line too long");
                self.closed = true;
                Err(QuizError::InputClosed)
            }
            // 잘못된 UTF-8은 대체 문자로 바꿔 오답으로 처리되게 한다.
            Ok(_) => Ok(String::from_utf8_lossy(&buf).trim().to_string()),
            Err(err) => {
                warn!(peer = %self.peer, error = %err, "failed to read from client");
                self.closed = true;
                Err(QuizError::InputClosed)
            }
        }
    }

    async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(err) = self.writer.shutdown().await {
            debug!(peer = %self.peer, error = %err, "failed to shut down client connection");
        }
    }
}
