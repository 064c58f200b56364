//! 단일 퀴즈에 답해보는 유스케이스.

use crate::application::ports::{QuizStore, Session, Tone};
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::validate_id;

pub struct TestQuizUseCase<'a> {
    pub store: &'a dyn QuizStore,
}

impl<'a> TestQuizUseCase<'a> {
    /// 질문을 띄우고 정답 여부를 반환한다. 재시도는 없다.
    pub async fn execute(&self, session: &mut dyn Session, raw_id: Option<&str>) -> QuizResult<bool> {
        let id = validate_id(raw_id)?;
        let quiz = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(QuizError::NotFound { id })?;

        let response = session.prompt(&format!("{} ", quiz.question), None).await?;
        let correct = quiz.is_answered_by(&response);

        if correct {
            session.emit_line("Your answer is correct.", None).await;
            session.emit_banner("CORRECT", Tone::Success).await;
        } else {
            session.emit_line("Your answer is incorrect.", None).await;
            session.emit_banner("INCORRECT", Tone::Failure).await;
        }
        Ok(correct)
    }
}
