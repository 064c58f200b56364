//! 프로세스 메모리에만 존재하는 퀴즈 저장소.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::QuizStore;
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::{Quiz, QuizDraft};

#[derive(Default)]
struct MemoryState {
    next_id: i64,
    rows: BTreeMap<i64, Quiz>,
}

/// `--memory` 실행과 테스트용 저장소. id는 1부터 단조 증가하며 재사용하지 않는다.
#[derive(Default)]
pub struct InMemoryQuizStore {
    state: Mutex<MemoryState>,
}

impl InMemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 질문/답 쌍으로 채운 저장소를 만든다.
    pub fn with_quizzes<I, Q, A>(quizzes: I) -> Self
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: Into<String>,
        A: Into<String>,
    {
        let mut state = MemoryState::default();
        for (question, answer) in quizzes {
            state.next_id += 1;
            let id = state.next_id;
            state.rows.insert(
                id,
                Quiz {
                    id,
                    question: question.into(),
                    answer: answer.into(),
                },
            );
        }
        Self {
            state: Mutex::new(state),
        }
    }

    /// id를 그대로 보존해 채운다(비연속 id 재현용).
    pub fn with_records(records: Vec<Quiz>) -> Self {
        let mut state = MemoryState::default();
        for quiz in records {
            state.next_id = state.next_id.max(quiz.id);
            state.rows.insert(quiz.id, quiz);
        }
        Self {
            state: Mutex::new(state),
        }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MemoryState) -> QuizResult<T>) -> QuizResult<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| QuizError::store("quiz store lock poisoned"))?;
        f(&mut state)
    }
}

#[async_trait]
impl QuizStore for InMemoryQuizStore {
    async fn find_all(&self) -> QuizResult<Vec<Quiz>> {
        self.with_state(|state| Ok(state.rows.values().cloned().collect()))
    }

    async fn find_by_id(&self, id: i64) -> QuizResult<Option<Quiz>> {
        self.with_state(|state| Ok(state.rows.get(&id).cloned()))
    }

    async fn count(&self) -> QuizResult<u64> {
        self.with_state(|state| Ok(state.rows.len() as u64))
    }

    async fn create(&self, draft: QuizDraft) -> QuizResult<Quiz> {
        draft.validate()?;
        self.with_state(|state| {
            state.next_id += 1;
            let quiz = Quiz {
                id: state.next_id,
                question: draft.question,
                answer: draft.answer,
            };
            state.rows.insert(quiz.id, quiz.clone());
            Ok(quiz)
        })
    }

    async fn destroy(&self, id: i64) -> QuizResult<u64> {
        self.with_state(|state| Ok(u64::from(state.rows.remove(&id).is_some())))
    }

    async fn save(&self, quiz: &Quiz) -> QuizResult<Quiz> {
        QuizDraft::new(quiz.question.clone(), quiz.answer.clone()).validate()?;
        self.with_state(|state| match state.rows.get_mut(&quiz.id) {
            Some(row) => {
                *row = quiz.clone();
                Ok(quiz.clone())
            }
            None => Err(QuizError::NotFound { id: quiz.id }),
        })
    }
}
