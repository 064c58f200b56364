//! 저장된 퀴즈 목록을 출력하는 유스케이스.

use crate::application::ports::{QuizStore, Session};
use crate::application::usecases::view::quiz_heading;
use crate::domain::error::QuizResult;

pub struct ListQuizzesUseCase<'a> {
    pub store: &'a dyn QuizStore,
}

impl<'a> ListQuizzesUseCase<'a> {
    /// 저장소 순서대로 `[id]: question` 한 줄씩 출력한다.
    pub async fn execute(&self, session: &mut dyn Session) -> QuizResult<()> {
        let quizzes = self.store.find_all().await?;
        for quiz in &quizzes {
            let line = quiz_heading(session, quiz);
            session.emit_line(&line, None).await;
        }
        Ok(())
    }
}
