//! 통합 테스트용 스크립트 세션.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;

use quizpilot::application::ports::{QuizStore, Session, Tone};
use quizpilot::domain::error::{QuizError, QuizResult};
use quizpilot::domain::quiz::Quiz;
use quizpilot::infrastructure::store::InMemoryQuizStore;
use quizpilot::interface::cli::AppComposition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Line(String),
    Banner(String),
    Error(String),
}

type Responder = Box<dyn FnMut(&str) -> Option<String> + Send>;

/// 미리 정한 입력을 순서대로 돌려주고, 모든 출력을 기록한다.
/// 입력이 떨어지면 `InputClosed`.
#[derive(Default)]
pub struct ScriptedSession {
    inputs: VecDeque<String>,
    responder: Option<Responder>,
    pub outputs: Vec<Output>,
    pub prompts: Vec<(String, Option<String>)>,
    pub closed: bool,
}

impl ScriptedSession {
    pub fn with_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// 프롬프트 문구를 보고 답을 정하는 세션.
    pub fn answering(responder: impl FnMut(&str) -> Option<String> + Send + 'static) -> Self {
        Self {
            responder: Some(Box::new(responder)),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        self.outputs
            .iter()
            .filter_map(|o| match o {
                Output::Line(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.outputs
            .iter()
            .filter_map(|o| match o {
                Output::Error(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn banners(&self) -> Vec<&str> {
        self.outputs
            .iter()
            .filter_map(|o| match o {
                Output::Banner(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.outputs.clear();
        self.prompts.clear();
    }
}

#[async_trait]
impl Session for ScriptedSession {
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }

    async fn emit_line(&mut self, text: &str, _tone: Option<Tone>) {
        self.outputs.push(Output::Line(text.to_string()));
    }

    async fn emit_banner(&mut self, text: &str, _tone: Tone) {
        self.outputs.push(Output::Banner(text.to_string()));
    }

    async fn emit_error(&mut self, text: &str) {
        self.outputs.push(Output::Error(text.to_string()));
    }

    async fn prompt(&mut self, text: &str, prefill: Option<&str>) -> QuizResult<String> {
        self.prompts
            .push((text.to_string(), prefill.map(ToString::to_string)));
        if self.closed {
            return Err(QuizError::InputClosed);
        }

        let next = match self.responder.as_mut() {
            Some(responder) => responder(text),
            None => self.inputs.pop_front(),
        };
        next.map(|s| s.trim().to_string())
            .ok_or(QuizError::InputClosed)
    }

    async fn close(&mut self) {
        self.closed = true;
    }
}

pub fn capitals() -> Arc<InMemoryQuizStore> {
    Arc::new(InMemoryQuizStore::with_quizzes([
        ("Capital of Italy", "Rome"),
        ("Capital of France", "Paris"),
        ("Capital of Spain", "Madrid"),
    ]))
}

pub fn composition(store: Arc<InMemoryQuizStore>) -> AppComposition {
    let store: Arc<dyn QuizStore> = store;
    AppComposition::new(store, Some(7))
}

pub fn quiz(id: i64, question: &str, answer: &str) -> Quiz {
    Quiz {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// 저장소 호출 횟수를 세는 래퍼.
pub struct CountingStore {
    inner: InMemoryQuizStore,
    calls: std::sync::atomic::AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: InMemoryQuizStore) -> Self {
        Self {
            inner,
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

#[async_trait]
impl QuizStore for CountingStore {
    async fn find_all(&self) -> QuizResult<Vec<Quiz>> {
        self.hit();
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> QuizResult<Option<Quiz>> {
        self.hit();
        self.inner.find_by_id(id).await
    }

    async fn count(&self) -> QuizResult<u64> {
        self.hit();
        self.inner.count().await
    }

    async fn create(&self, draft: quizpilot::domain::quiz::QuizDraft) -> QuizResult<Quiz> {
        self.hit();
        self.inner.create(draft).await
    }

    async fn destroy(&self, id: i64) -> QuizResult<u64> {
        self.hit();
        self.inner.destroy(id).await
    }

    async fn save(&self, quiz: &Quiz) -> QuizResult<Quiz> {
        self.hit();
        self.inner.save(quiz).await
    }
}

/// 모든 호출이 같은 저장소 오류로 실패하는 저장소.
pub struct FailingStore {
    pub message: &'static str,
}

impl FailingStore {
    fn fail<T>(&self) -> QuizResult<T> {
        Err(QuizError::store(self.message))
    }
}

#[async_trait]
impl QuizStore for FailingStore {
    async fn find_all(&self) -> QuizResult<Vec<Quiz>> {
        self.fail()
    }

    async fn find_by_id(&self, _id: i64) -> QuizResult<Option<Quiz>> {
        self.fail()
    }

    async fn count(&self) -> QuizResult<u64> {
        self.fail()
    }

    async fn create(&self, _draft: quizpilot::domain::quiz::QuizDraft) -> QuizResult<Quiz> {
        self.fail()
    }

    async fn destroy(&self, _id: i64) -> QuizResult<u64> {
        self.fail()
    }

    async fn save(&self, _quiz: &Quiz) -> QuizResult<Quiz> {
        self.fail()
    }
}
