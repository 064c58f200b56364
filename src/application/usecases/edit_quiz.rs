//! 기존 퀴즈를 편집하는 유스케이스.

use crate::application::ports::{QuizStore, Session, Tone};
use crate::application::usecases::form::prompt_draft;
use crate::application::usecases::view::question_and_answer;
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::{Quiz, validate_id};

pub struct EditQuizUseCase<'a> {
    pub store: &'a dyn QuizStore,
}

impl<'a> EditQuizUseCase<'a> {
    /// 현재 질문/답을 초기값으로 채워 다시 입력받고 저장한다.
    pub async fn execute(&self, session: &mut dyn Session, raw_id: Option<&str>) -> QuizResult<Quiz> {
        let id = validate_id(raw_id)?;
        let mut quiz = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(QuizError::NotFound { id })?;

        let draft = prompt_draft(session, Some(&quiz)).await?;
        quiz.apply(draft);
        let saved = self.store.save(&quiz).await?;

        let line = format!(
            " Quiz {} changed to: {}",
            session.paint(&saved.id.to_string(), Tone::Accent),
            question_and_answer(session, &saved)
        );
        session.emit_line(&line, None).await;
        Ok(saved)
    }
}
