//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{Config, StoreOptions};
use crate::domain::error::QuizResult;
use crate::domain::quiz::{Quiz, QuizDraft};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self, store: &StoreOptions) -> Result<String>;
}

/// 퀴즈 레코드 영속화 포트.
/// 필드 검증 실패는 `RecordInvalid`, 그 외 저장소 오류는 `StoreFailure`로 돌려준다.
#[async_trait]
pub trait QuizStore: Send + Sync {
    async fn find_all(&self) -> QuizResult<Vec<Quiz>>;
    async fn find_by_id(&self, id: i64) -> QuizResult<Option<Quiz>>;
    async fn count(&self) -> QuizResult<u64>;
    async fn create(&self, draft: QuizDraft) -> QuizResult<Quiz>;
    /// 삭제된 행 수를 반환한다. 0건은 오류가 아니다.
    async fn destroy(&self, id: i64) -> QuizResult<u64>;
    async fn save(&self, quiz: &Quiz) -> QuizResult<Quiz>;
}

/// 출력 강조 색상 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Success,
    Failure,
    Highlight,
    Prompt,
}

/// 한 REPL 연결(터미널 또는 TCP 클라이언트)의 입출력 능력.
#[async_trait]
pub trait Session: Send {
    /// 출력 싱크에 맞게 문자열 일부를 강조한다(색상 미지원 시 원문).
    fn paint(&self, text: &str, tone: Tone) -> String;

    async fn emit_line(&mut self, text: &str, tone: Option<Tone>);

    /// 게임 결과 등 큰 강조 출력.
    async fn emit_banner(&mut self, text: &str, tone: Tone);

    async fn emit_error(&mut self, text: &str);

    /// 한 줄을 입력받아 trim한 값을 반환한다.
    /// `prefill`은 지원하는 터미널에서만 편집 가능한 초기값으로 채워진다.
    /// 입력이 끝나면 `QuizError::InputClosed`.
    async fn prompt(&mut self, text: &str, prefill: Option<&str>) -> QuizResult<String>;

    /// 세션을 종료한다. 이후 `prompt`는 `InputClosed`를 반환한다.
    async fn close(&mut self);
}
