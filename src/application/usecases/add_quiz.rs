//! 새 퀴즈를 대화형으로 추가하는 유스케이스.

use crate::application::ports::{QuizStore, Session, Tone};
use crate::application::usecases::form::prompt_draft;
use crate::application::usecases::view::quiz_detail;
use crate::domain::error::QuizResult;
use crate::domain::quiz::Quiz;

pub struct AddQuizUseCase<'a> {
    pub store: &'a dyn QuizStore,
}

impl<'a> AddQuizUseCase<'a> {
    /// 질문/답을 차례로 입력받아 저장하고, 생성된 레코드를 반환한다.
    pub async fn execute(&self, session: &mut dyn Session) -> QuizResult<Quiz> {
        let draft = prompt_draft(session, None).await?;
        let quiz = self.store.create(draft).await?;

        let line = format!(
            " {}:{}",
            session.paint("Added", Tone::Accent),
            quiz_detail(session, &quiz)
        );
        session.emit_line(&line, None).await;
        Ok(quiz)
    }
}
