//! 단일 퀴즈의 질문과 답을 출력하는 유스케이스.

use crate::application::ports::{QuizStore, Session};
use crate::application::usecases::view::quiz_detail;
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::validate_id;

pub struct ShowQuizUseCase<'a> {
    pub store: &'a dyn QuizStore,
}

impl<'a> ShowQuizUseCase<'a> {
    pub async fn execute(&self, session: &mut dyn Session, raw_id: Option<&str>) -> QuizResult<()> {
        let id = validate_id(raw_id)?;
        let quiz = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(QuizError::NotFound { id })?;

        let line = quiz_detail(session, &quiz);
        session.emit_line(&line, None).await;
        Ok(())
    }
}
